//! Print the OpenAPI document for the fieldwork API to stdout

use fieldwork::contract::ApiDoc;
use utoipa::OpenApi;

fn main() -> anyhow::Result<()> {
    println!("{}", ApiDoc::openapi().to_pretty_json()?);
    Ok(())
}
