// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use feed_contracts::client::{AccessControlClient, FeedManagerClient, ServiceConnection};
use feed_editor::config::Config;
use feed_editor::i18n::FluentTranslator;
use feed_editor::{
    DialogPresenter, FeedDefinitionMessage, FeedEditorApp, FeedServices, SharedFeed, fl, i18n,
    logging, views,
};
use feed_types::SaveContext;
use i18n_embed::DesktopLanguageRequester;

#[derive(Debug, Parser)]
#[command(name = "feed-editor", version, about = "View and edit a feed's general info")]
struct Cli {
    /// Configuration file (defaults to $FEED_EDITOR_CONFIG or the XDG config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a feed's general info
    Show {
        feed_id: String,
        /// Print the raw feed document instead
        #[arg(long)]
        json: bool,
    },
    /// Edit a feed's general info and save it
    Edit {
        feed_id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        system_name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        template: Option<String>,
        #[arg(long)]
        allow_indexing: Option<bool>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref());
    let _log_guard = logging::init(&config);

    let requested_languages = DesktopLanguageRequester::requested_languages();
    i18n::init(&requested_languages);

    let conn = ServiceConnection::new(&config.client_config())
        .context("failed to set up the feed manager connection")?;
    let feeds = FeedManagerClient::new(conn.clone());

    match cli.command {
        Command::Show { feed_id, json } => {
            let feed = feeds
                .load_feed(&feed_id)
                .await
                .with_context(|| fl!("load-failed", id = feed_id.as_str()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&feed)?);
            } else {
                let panel = feed_editor::FeedDefinitionPanel::new(SharedFeed::new(feed));
                println!("{}", views::feed_definition::feed_definition(&panel));
            }
        }
        Command::Edit {
            feed_id,
            name,
            system_name,
            description,
            template,
            allow_indexing,
        } => {
            let feed = feeds
                .load_feed(&feed_id)
                .await
                .with_context(|| fl!("load-failed", id = feed_id.as_str()))?;

            let presenter = Arc::new(DialogPresenter::new());
            let services = FeedServices {
                permissions: Arc::new(AccessControlClient::new(
                    conn,
                    config.entity_access_control,
                )),
                persistence: Arc::new(feeds),
                presenter: presenter.clone(),
                translator: Arc::new(FluentTranslator),
            };

            let (mut app, init) = FeedEditorApp::new(SharedFeed::new(feed), services);
            app.run(init).await;

            if !app.panel().can_edit() {
                bail!(fl!("feed-definition-edit-denied"));
            }

            app.dispatch(FeedDefinitionMessage::Edit).await;

            let updates = [
                name.map(FeedDefinitionMessage::NameUpdate),
                system_name.map(FeedDefinitionMessage::SystemNameUpdate),
                description.map(FeedDefinitionMessage::DescriptionUpdate),
                template.map(FeedDefinitionMessage::TemplateUpdate),
                allow_indexing.map(FeedDefinitionMessage::AllowIndexingUpdate),
            ];
            for message in updates.into_iter().flatten() {
                app.dispatch(message).await;
            }

            let display_name = app.panel().model().display_name();
            if !app.panel().has_changes() {
                println!("{}", fl!("feed-definition-unchanged", name = display_name.as_str()));
                app.dispatch(FeedDefinitionMessage::Cancel).await;
                return Ok(());
            }

            if !app.panel().can_save() {
                bail!(fl!("feed-definition-not-editing", name = display_name.as_str()));
            }

            app.dispatch(FeedDefinitionMessage::Save(SaveContext::from_control(
                "feed-definition",
            )))
            .await;

            if let Some(dialog) = presenter.dialog() {
                eprintln!("{}", views::dialogs::dialog(&dialog));
                bail!(fl!("save-failed"));
            }

            let display_name = app.panel().model().display_name();
            println!("{}", fl!("feed-definition-saved", name = display_name.as_str()));
            println!("{}", views::feed_definition::feed_definition(app.panel()));
        }
    }

    Ok(())
}
