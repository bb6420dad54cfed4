use std::error::Error;
use std::process::exit;

mod generate;
mod renderer;
mod template;

use template::Template;

fn run() -> Result<(), Box<dyn Error>> {
    env_logger::builder().format_timestamp(None).init();

    let template = Template::default();
    let renderer = renderer::select(&template)?;
    log::info!("writing icons to {}", generate::TARGET_DIR);
    generate::generate(
        renderer.as_ref(),
        generate::TARGET_DIR,
        &generate::SIZES,
    )?;

    Ok(())
}

fn main() {
    match run() {
        Err(e) => {
            eprintln!("Failed to run: {}", e);
            let mut error = e.source();
            while let Some(e) = error {
                eprintln!("Caused by: {}", e);
                error = e.source();
            }
            exit(1);
        }
        Ok(_) => {}
    }
}
