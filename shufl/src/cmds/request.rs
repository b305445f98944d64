use anyhow::{Context, Result};
use clap::Parser;

use shufl_service::reqres;

#[derive(Debug, Parser)]
pub struct Opts {
    #[clap(long)]
    path: String,

    #[clap(long, default_value = "{}")]
    data: String,
}

pub async fn run(opts: &Opts) -> Result<()> {
    let data: serde_json::Value =
        serde_json::from_str(&opts.data).context("Failed to parse --data as JSON")?;

    let request = reqres::Request {
        path: opts.path.clone(),
        data: Some(data),
    };
    let response = reqres::handle_request(request).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
