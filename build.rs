use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const CSS_ENTRY: &str = "assets/css/main.css";
const CSS_OUTPUT_DIR: &str = "assets/dist";
const CSS_OUTPUT: &str = "assets/dist/bundle.css";

fn main() {
    println!("cargo:rerun-if-changed=assets/css/");
    // Read through option_env! by AppConfig::from_build_env
    for var in ["BABYSTEPS_API_URL", "BABYSTEPS_TOP_K", "BABYSTEPS_TIMEOUT_SECS"] {
        println!("cargo:rerun-if-env-changed={var}");
    }

    // Generated on every build; not checked in
    fs::create_dir_all(CSS_OUTPUT_DIR).expect("Failed to create assets/dist directory");

    // Resolve @import rules from the entry stylesheet
    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());
    let mut stylesheet = bundler
        .bundle(Path::new(CSS_ENTRY))
        .expect("Failed to bundle CSS");

    stylesheet
        .minify(MinifyOptions::default())
        .expect("Failed to minify CSS");

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .expect("Failed to generate CSS output");

    fs::write(CSS_OUTPUT, css.code).expect("Failed to write bundle.css");
}
