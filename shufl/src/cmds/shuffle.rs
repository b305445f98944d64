use anyhow::Result;
use clap::Parser;

use shufl_core::sequence;
use shufl_core::{DurstenfeldShuffler, Shuffler};

#[derive(Debug, Parser)]
pub struct Opts {
    #[clap(long)]
    input: String,

    #[clap(long)]
    seed: Option<u64>,

    #[clap(long, default_value = "1")]
    times: u32,
}

pub async fn run(opts: &Opts) -> Result<()> {
    let items = sequence::from_dasherized(&opts.input);
    let mut shuffler = DurstenfeldShuffler::create(opts.seed);
    for _ in 0..opts.times {
        let mut shuffled = items.clone();
        shuffler.shuffle(&mut shuffled)?;
        println!("{}", sequence::to_dasherized(&shuffled));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_times_must_be_non_negative() {
        assert!(Opts::try_parse_from(["shuffle", "--input", "A-B", "--times=-1"]).is_err());
        let opts = Opts::try_parse_from(["shuffle", "--input", "A-B"]).unwrap();
        assert_eq!(opts.times, 1);
    }
}
