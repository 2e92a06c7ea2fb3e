//! Build-script helper that runs dynamap codec generation for a schema
//! source and drops the output where `include!` can pick it up.

#[macro_export]
macro_rules! build {
    ($source:expr) => {{
        use ::std::{env::var, fs::File, io::Write, path::PathBuf};

        //
        // CARGO
        //

        println!("cargo:rerun-if-changed=build.rs");

        // Get the output directory set by Cargo
        let out_dir = var("OUT_DIR").expect("OUT_DIR not set");

        //
        // CODEC CODE
        //

        let output = $crate::generate(&$source)?;

        // write the file
        let codec_file = PathBuf::from(out_dir).join("dynamap.rs");
        let mut file = File::create(codec_file)?;
        file.write_all(output.as_bytes())?;
    }};
}
