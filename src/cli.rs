use clap::Parser;
use std::path::PathBuf;

use crate::domain::constants::DEFAULT_EVIDENCE_DIR;

#[derive(Parser, Debug)]
#[command(
    name = "valor-attest",
    version,
    about = "Claim-guard verifier: SHA3-512 attestation of an evidence directory"
)]
pub struct Cli {
    #[arg(
        long,
        value_name = "DIR",
        default_value = DEFAULT_EVIDENCE_DIR,
        help = "Directory of evidence files (created if missing)"
    )]
    pub verify: PathBuf,
}
