use anyhow::Result;
use lazy_static::lazy_static;
use std::collections::HashMap;

pub const CORPUS_JSON: &str = include_str!("../corpus.json");

lazy_static! {
    pub static ref SAMPLES: HashMap<String, String> = {
        serde_json::from_str(CORPUS_JSON).expect("Failed to parse static corpus.json")
    };
}

pub struct Corpus;

impl Corpus {
  pub fn new() -> Self {
      Self
  }

  pub fn get_inputs(&self, count: Option<usize>) -> Result<Vec<String>> {
      let count = count.unwrap_or_else(|| SAMPLES.len());

      if count > SAMPLES.len() {
          return Err(anyhow::anyhow!("not enough sample inputs"));
      }

      Ok(SAMPLES.values().take(count).cloned().collect())
  }

  pub fn get_input(&self, name: &str) -> Result<String> {
      let input = SAMPLES.get(name)
          .ok_or_else(|| anyhow::anyhow!("Sample not found"))?;

      Ok(input.clone())
  }
}

// Public interface
pub fn new() -> Corpus {
  Corpus::new()
}
