//! Print the OpenAPI document as pretty JSON.

use dmaker::doc::ApiDoc;
use utoipa::OpenApi;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let json = ApiDoc::openapi().to_pretty_json()?;
    #[expect(clippy::print_stdout, reason = "the document is the program output")]
    {
        println!("{json}");
    }
    Ok(())
}
