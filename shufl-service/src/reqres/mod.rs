use anyhow::Result;

mod ping;
mod shuffle;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Request {
    pub path: String,
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Response {
    pub ok: bool,
    pub data: Option<serde_json::Value>,
    pub errors: Option<serde_json::Value>
}

pub async fn handle_request(req: Request) -> Result<Response> {
    log::info!("Handling request: {:?}", req);
    let path = req.path;
    let data = req.data.unwrap_or_default();
    let response = match path.as_str() {
        "/ping" => {
            ping::handler(Some(data.clone())).await?
        },
        "/shuffle" => {
            shuffle::handler(Some(data.clone())).await?
        }
        _ => {
            Response {
                ok: false,
                data: None,
                errors: Some(serde_json::json!({"error": "Unknown path"}))
            }
        }
    };
    log::info!("Response: {:?}", response);
    Ok(response)
}
