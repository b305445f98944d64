use anyhow::Result;
use serde_json;

use shufl_core::sequence;
use shufl_core::{DurstenfeldShuffler, Shuffler};

use crate::reqres::Response;

pub async fn handler(data: Option<serde_json::Value>) -> Result<Response> {
    log::info!("REQ /shuffle {:?}", data);
    let Some(input) = data
        .as_ref()
        .and_then(|d| d.get("input"))
        .and_then(|v| v.as_str())
    else {
        return Ok(Response {
            ok: false,
            data: None,
            errors: Some(serde_json::json!({"error": "Missing input"}))
        });
    };

    let mut items = sequence::from_dasherized(input);
    let mut shuffler = DurstenfeldShuffler::new(None);
    shuffler.shuffle(&mut items)?;

    let response = Response {
        ok: true,
        data: Some(serde_json::json!({"output": sequence::to_dasherized(&items)})),
        errors: None
    };
    Ok(response)
}
