//! Build script for proto compilation.
//!
//! The alert service types are committed in `src/generated.rs`, so this only
//! needs to run when `proto/coralogix/alerts/v1/alert_service.proto` changes.
//!
//! To regenerate: `cargo build --features regenerate-proto`

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "regenerate-proto")]
    {
        let out_dir = std::path::PathBuf::from("src");
        tonic_prost_build::configure()
            .build_server(false)
            .out_dir(&out_dir)
            .compile_protos(&["proto/coralogix/alerts/v1/alert_service.proto"], &["proto"])?;

        let generated = out_dir.join("com.coralogix.alerts.v1.rs");
        let target = out_dir.join("generated.rs");
        if generated.exists() {
            std::fs::rename(generated, target)?;
        }
    }

    println!("cargo:rerun-if-changed=proto/coralogix/alerts/v1/alert_service.proto");

    Ok(())
}
