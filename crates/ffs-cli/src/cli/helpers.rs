use anyhow::Context;
use std::path::PathBuf;

pub(super) fn current_working_dir() -> anyhow::Result<PathBuf> {
    std::env::current_dir().context("failed to read current working directory")
}
