use std::path::PathBuf;

use anyhow::Result;

use aecc_cli::pipeline::{CheckReport, GroupRun, RunSummary, run_check, run_group};
use aecc_standards::default_tables_root;

use crate::cli::{CheckArgs, GroupArgs};

pub fn run_group_command(args: &GroupArgs) -> Result<RunSummary> {
    let run = GroupRun {
        input: args.input.clone(),
        output: args.output.clone(),
        tables_dir: resolve_tables_dir(args.tables_dir.clone()),
    };
    run_group(&run)
}

pub fn run_check_command(args: &CheckArgs) -> Result<CheckReport> {
    run_check(&resolve_tables_dir(args.tables_dir.clone()))
}

fn resolve_tables_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(default_tables_root)
}
