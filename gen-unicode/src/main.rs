#![allow(clippy::uninlined_format_args)]

use anyhow::{bail, Context, Result};
use iufold::{
    read_artifacts, render_artifacts, verify, write_all_or_nothing, ArtifactPaths,
    CaseFoldTables,
};
use std::fs;
use std::path::{Path, PathBuf};
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

mod case_folding;
mod rust_source;

use case_folding::RawFolds;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "gen-unicode",
    about = "Create the case folding tables used to rewrite /iu regular expressions"
)]
struct Opt {
    /// Directory of the Unicode Character Database containing CaseFolding.txt.
    #[structopt(long, parse(from_os_str), conflicts_with_all = &["common", "simple"])]
    ucd_dir: Option<PathBuf>,

    /// JSON table of common (C) folds keyed by decimal code point.
    #[structopt(long, parse(from_os_str), requires = "simple")]
    common: Option<PathBuf>,

    /// JSON table of simple (S) folds keyed by decimal code point.
    #[structopt(long, parse(from_os_str), requires = "common")]
    simple: Option<PathBuf>,

    /// Directory to write the artifacts to.
    #[structopt(long, parse(from_os_str), default_value = "data")]
    out_dir: PathBuf,

    /// File name of the one-way simple case folding table.
    #[structopt(long, default_value = "simple-case-folding-mappings.json")]
    simple_name: String,

    /// File name of the equivalence table.
    #[structopt(long, default_value = "iu-mappings.json")]
    iu_name: String,

    /// Also write the tables as a Rust module.
    #[structopt(long, parse(from_os_str))]
    rust: Option<PathBuf>,

    /// Verify the existing artifacts instead of writing them. If an input is
    /// given, also fail when the artifacts differ from a fresh build.
    #[structopt(long)]
    check: bool,

    /// Log each pipeline stage.
    #[structopt(long, short)]
    verbose: bool,
}

impl Opt {
    fn paths(&self) -> ArtifactPaths {
        ArtifactPaths {
            simple: self.out_dir.join(&self.simple_name),
            iu: self.out_dir.join(&self.iu_name),
        }
    }

    fn load(&self) -> Result<Option<RawFolds>> {
        match (&self.ucd_dir, &self.common, &self.simple) {
            (Some(dir), _, _) => case_folding::load_ucd(dir).map(Some),
            (None, Some(common), Some(simple)) => {
                case_folding::load_json(common, simple).map(Some)
            }
            _ => Ok(None),
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn check(opt: &Opt, paths: &ArtifactPaths) -> Result<()> {
    let on_disk = read_artifacts(paths).context("could not read artifacts")?;
    verify(&on_disk).context("artifacts are inconsistent")?;
    if let Some(raw) = opt.load()? {
        let fresh = CaseFoldTables::build(&raw.common, &raw.simple);
        let (simple, iu) = render_artifacts(&fresh)?;
        for (path, expected) in [(&paths.simple, simple), (&paths.iu, iu)] {
            let actual = fs::read_to_string(path)
                .with_context(|| format!("could not read {}", path.display()))?;
            if actual != expected {
                bail!("{} is stale; rerun gen-unicode", path.display());
            }
        }
    }
    tracing::info!(
        simple = on_disk.simple.len(),
        iu = on_disk.iu.len(),
        "artifacts verified"
    );
    Ok(())
}

fn generate(opt: &Opt, paths: &ArtifactPaths) -> Result<()> {
    let Some(raw) = opt.load()? else {
        bail!("no input: pass --ucd-dir, or --common and --simple");
    };
    let tables = CaseFoldTables::build(&raw.common, &raw.simple);
    verify(&tables).context("generated tables are inconsistent")?;

    let (simple, iu) = render_artifacts(&tables)?;
    let source = opt.rust.as_ref().map(|_| rust_source::generate(&tables));
    let mut files: Vec<(&Path, &[u8])> = vec![
        (paths.simple.as_path(), simple.as_bytes()),
        (paths.iu.as_path(), iu.as_bytes()),
    ];
    if let (Some(path), Some(source)) = (&opt.rust, &source) {
        files.push((path.as_path(), source.as_bytes()));
    }
    write_all_or_nothing(&files).context("could not write artifacts")?;
    Ok(())
}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    init_tracing(opt.verbose);

    let paths = opt.paths();
    if opt.check {
        check(&opt, &paths)
    } else {
        generate(&opt, &paths)
    }
}
