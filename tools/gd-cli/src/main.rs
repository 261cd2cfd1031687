mod loader;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use gd_catalog::resource::InMemoryStylesheetHost;
use gd_catalog::view::{self, PageView};
use gd_catalog::{AppConfig, CatalogSession, Notice, SnippetTab, StyleCommand};
use loader::{Source, SourceLoader};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "glyphdeck", about = "Browse icon font groups and generate HTML snippets")]
struct Cli {
    /// Web root or directory the manifest paths are relative to.
    #[arg(long, env = "GLYPHDECK_BASE", default_value = ".")]
    base: String,

    /// Manifest location, relative to the base.
    #[arg(long, env = "GLYPHDECK_CONFIG")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the icon groups in the manifest.
    Groups,
    /// List the icons of a group.
    Icons {
        group: String,
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Print the HTML snippet for an icon.
    Snippet {
        group: String,
        icon: String,
        #[arg(long)]
        size: Option<String>,
        #[arg(long)]
        color: Option<String>,
        /// Emit the styled snippet instead of the plain one.
        #[arg(long)]
        styled: bool,
    },
    /// Check and print the download location of a group.
    Download { group: String },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let loader = SourceLoader::new(Source::parse(&cli.base));
    let config = AppConfig::with_config_url(cli.config);
    info!("reading icon groups from {}", loader.resolve(&config.config_url));

    let (mut session, notice) = CatalogSession::load(config, &loader).await;
    if let Some(notice) = notice {
        report(&notice);
        bail!("no icon groups available");
    }

    let mut stylesheets = InMemoryStylesheetHost::default();

    match cli.command {
        Command::Groups => {
            for card in view::group_cards(session.groups().groups()) {
                let status = if card.available {
                    format!("{} icons", card.count)
                } else {
                    "coming soon".to_owned()
                };
                println!("{:<16} {:<28} {:<8} {}", card.id, card.name, card.prefix, status);
            }
        }
        Command::Icons { group, search } => {
            select(&mut session, &group, &loader, &mut stylesheets).await?;
            session.state_mut().set_search(&search);

            if let PageView::Icons { grid, .. } = view::page(&session) {
                if grid.is_empty() {
                    println!("No icons found");
                }
                for card in &grid.cards {
                    println!("{}", card.display_name);
                }
                eprintln!("{} of {} icons", grid.stats.visible, grid.stats.total);
            }
        }
        Command::Snippet {
            group,
            icon,
            size,
            color,
            styled,
        } => {
            select(&mut session, &group, &loader, &mut stylesheets).await?;

            let state = session.state_mut();
            state
                .open_style_modal(&icon)
                .with_context(|| format!("icon '{icon}' is not part of group '{group}'"))?;
            if let Some(size) = size {
                state.apply_style(StyleCommand::SetSizeFromInput(size));
            }
            if let Some(color) = color {
                state.apply_style(StyleCommand::SetColor(color));
            }
            if styled {
                state.set_tab(SnippetTab::Styled);
            }

            let preview = view::preview(session.state()).context("style preview unavailable")?;
            println!("{}", preview.active_snippet());
        }
        Command::Download { group } => match session.prepare_download(&group, &loader).await {
            Ok(path) => println!("{}", loader.resolve(&path)),
            Err(err) => {
                report(&Notice::from(err));
                bail!("download unavailable");
            }
        },
    }

    Ok(())
}

async fn select(
    session: &mut CatalogSession,
    group: &str,
    loader: &SourceLoader,
    stylesheets: &mut InMemoryStylesheetHost,
) -> anyhow::Result<()> {
    if let Some(notice) = session.select_group(group, loader, stylesheets).await {
        report(&notice);
        if session.state().current_group().is_none() {
            bail!("could not select group '{group}'");
        }
    }
    Ok(())
}

fn report(notice: &Notice) {
    if notice.is_error() {
        eprintln!("error: {}", notice.message);
    } else {
        eprintln!("{}", notice.message);
    }
}
