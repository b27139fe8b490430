use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use pubs_core::FilterEngine;
use pubs_ingest::{load_catalog, resolve_catalog_path};
use pubs_model::{Catalog, CategoryFilter, ViewState};
use pubs_report::{export_bibtex, write_bibtex};

use pubs_cli::browse::run_session;
use pubs_cli::render::{JsonSink, TableSink, categories_table};

use crate::cli::{BrowseArgs, CatalogArgs, ExportArgs, ListArgs, OutputFormatArg, ViewArgs};

pub fn run_list(args: &ListArgs) -> Result<()> {
    let (path, catalog) = open_catalog(&args.catalog)?;
    let _guard = info_span!("list", catalog = %path.display()).entered();
    let mut engine = FilterEngine::new(&catalog);
    apply_view_args(&mut engine, &args.view);

    let stdout = io::stdout();
    match args.format {
        OutputFormatArg::Table => engine
            .apply_to(&mut TableSink::new(stdout.lock()))
            .context("render table")?,
        OutputFormatArg::Json => engine
            .apply_to(&mut JsonSink::new(stdout.lock(), engine.state().clone()))
            .context("render json")?,
    }
    Ok(())
}

pub fn run_categories(args: &CatalogArgs) -> Result<()> {
    let (_, catalog) = open_catalog(args)?;
    println!("{}", categories_table(&catalog));
    Ok(())
}

pub fn run_export(args: &ExportArgs) -> Result<()> {
    let (path, catalog) = open_catalog(&args.catalog)?;
    let _guard = info_span!("export", catalog = %path.display()).entered();
    if args.output == Path::new("-") {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(export_bibtex(catalog.records()).as_bytes())
            .context("write bibtex to stdout")?;
        return Ok(());
    }
    let written = write_bibtex(&args.output, catalog.records())
        .with_context(|| format!("export bibtex to {}", args.output.display()))?;
    println!(
        "Exported {written} of {} publications to {}",
        catalog.record_count(),
        args.output.display()
    );
    Ok(())
}

pub fn run_browse(args: &BrowseArgs) -> Result<()> {
    let (path, catalog) = open_catalog(&args.catalog)?;
    let _guard = info_span!("browse", catalog = %path.display()).entered();
    let mut engine = FilterEngine::with_state(&catalog, view_state(&args.view));
    run_session(&mut engine, io::stdin().lock(), io::stdout().lock()).context("browse session")?;
    Ok(())
}

fn open_catalog(args: &CatalogArgs) -> Result<(PathBuf, Catalog)> {
    let path = resolve_catalog_path(args.catalog.as_deref())?;
    let catalog =
        load_catalog(&path).with_context(|| format!("load catalog {}", path.display()))?;
    if catalog.is_empty() {
        warn!(path = %path.display(), "catalog has no publications");
    }
    info!(
        groups = catalog.groups.len(),
        records = catalog.record_count(),
        "catalog ready"
    );
    Ok((path, catalog))
}

/// Feed CLI view flags through the engine setters in search, filter, sort
/// order.
fn apply_view_args(engine: &mut FilterEngine<'_>, view: &ViewArgs) {
    if let Some(term) = &view.search {
        engine.set_search_term(term);
    }
    engine.set_filter(CategoryFilter::from_value(&view.filter));
    engine.set_sort(view.sort.into());
}

fn view_state(view: &ViewArgs) -> ViewState {
    ViewState {
        search_term: view.search.clone().unwrap_or_default(),
        filter: CategoryFilter::from_value(&view.filter),
        sort: view.sort.into(),
    }
}
