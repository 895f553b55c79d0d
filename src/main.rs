use anyhow::{Context, Result};
use docmill::{BuildSummary, Config, Manifest, MarkdownRenderer};
use std::fs;

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let mut manifest = match &config.manifest {
        Some(path) => Manifest::load(path)?,
        None => Manifest::builtin(),
    };

    if let Some(name) = &config.name {
        manifest.site.name = name.clone();
    }
    if manifest.site.name.is_empty() {
        manifest.site.name = config
            .project_name()
            .context("Failed to derive project name")?;
    }

    let output_dir = config.output_dir();
    fs::create_dir_all(&output_dir).context("Failed to create output directory")?;

    let renderer = MarkdownRenderer::new();
    let mut summary = BuildSummary::default();

    if !config.skip_pages {
        summary.doc_pages = docmill::build_doc_pages(
            &renderer,
            &manifest.site,
            &manifest.pages,
            &config.docs,
            &output_dir,
        )
        .context("Failed to build doc pages")?;
    }

    if !config.skip_book {
        if let Some(book) = &manifest.book {
            let (book_pages, root_index) =
                docmill::build_book(&renderer, &manifest.site, book, &config.docs, &output_dir)
                    .context("Failed to build book")?;
            summary.book_pages = book_pages;
            summary.root_index = root_index;
        }
    }

    println!(
        "\nGenerated {} doc pages and {} book pages in {}",
        summary.doc_pages.len(),
        summary.book_pages.len(),
        output_dir.display()
    );

    if !config.no_open {
        match summary.preview_target() {
            Some(target) => {
                if let Err(e) = open::that(target) {
                    eprintln!("Warning: Failed to open browser preview: {}", e);
                }
            }
            None => eprintln!("Warning: Nothing was generated, no preview to open"),
        }
    }

    Ok(())
}
