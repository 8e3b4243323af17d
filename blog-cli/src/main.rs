use std::io::{self, BufRead, Write};

use anyhow::{Context, anyhow, bail};
use blog_client::pages::{
    CreatePage, DeferredNotification, Destination, DetailPage, DetailView, EditPage, EditView, Effects, Field,
    ListPage, ListView, Notification,
};
use blog_client::render::{display_author, paragraphs};
use blog_client::{BlogClientHttp, ClientConfig, PostId};
use clap::Parser;

mod logging;

#[derive(Parser, Debug)]
#[clap(about = "Command-line client for the BlogSphere posts API")]
struct Cli {
    /// Base URL of the posts API. Falls back to BLOG_API_URL from `.env`, then http://localhost:5000.
    #[clap(short, long, env = "BLOG_API_URL")]
    server: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    List,
    Get {
        id: PostId,
    },
    Create {
        #[clap(long)]
        title: String,
        #[clap(long)]
        content: String,
        #[clap(long, default_value = "")]
        author: String,
    },
    Update {
        id: PostId,
        #[clap(long)]
        title: Option<String>,
        #[clap(long)]
        content: Option<String>,
        #[clap(long)]
        author: Option<String>,
    },
    Delete {
        id: PostId,
        /// Skip the confirmation prompt.
        #[clap(short, long)]
        yes: bool,
    },
}

fn print_notification(notification: Notification) {
    if notification.is_error() {
        eprintln!("{}: {}", notification.title, notification.description);
    } else {
        println!("{}: {}", notification.title, notification.description);
    }
}

fn report(effects: Effects) -> anyhow::Result<()> {
    match effects.notification {
        Some(n) if n.is_error() => bail!("{}", n.description),
        Some(n) => print_notification(n),
        None => {}
    }
    Ok(())
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

/// Turns the fetch failure queued on `page` into the command's error.
fn load_failed(page: &mut impl DeferredNotification, fallback: &'static str) -> anyhow::Error {
    match page.take_notification() {
        Some(n) => anyhow!("{}", n.description),
        None => anyhow!(fallback),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();
    let args = Cli::parse();

    let config = match args.server.as_deref() {
        Some(url) => ClientConfig::new(url)?,
        None => ClientConfig::from_env()?,
    };
    let client = BlogClientHttp::connect(&config)?;
    tracing::debug!(base_url = client.base_url(), "client ready");

    match args.command {
        Command::List => {
            let mut page = ListPage::new();
            page.load(&client).await;

            match page.view() {
                ListView::Posts(posts) => {
                    for post in posts {
                        println!("[{}] {} — by {}", post.id, post.title, display_author(&post.author));
                    }
                }
                ListView::Empty => println!("No posts found. Be the first to create a post!"),
                ListView::Failed => return Err(load_failed(&mut page, "Failed to load posts")),
                ListView::Loading => {}
            }
        }
        Command::Get { id } => {
            let mut page = DetailPage::new(id);
            page.load(&client).await;

            let DetailView::Found(post) = page.view() else {
                return Err(load_failed(&mut page, "Post not found"));
            };
            println!("{}", post.title);
            println!("By {}", display_author(&post.author));
            for paragraph in paragraphs(&post.content) {
                println!();
                println!("{paragraph}");
            }
        }
        Command::Create {
            title,
            content,
            author,
        } => {
            let mut page = CreatePage::new();
            page.set(Field::Title, title);
            page.set(Field::Content, content);
            page.set(Field::Author, author);

            let effects = page.submit(&client).await;
            let navigate = effects.navigate.clone();
            report(effects)?;
            if let Some(Destination::Detail(id)) = navigate {
                println!("Post created! ID: {id}");
            }
        }
        Command::Update {
            id,
            title,
            content,
            author,
        } => {
            let mut page = EditPage::new(id);
            page.load(&client).await;
            if !matches!(page.view(), EditView::Editing(_)) {
                return Err(load_failed(&mut page, "Post not found"));
            }

            for (field, value) in [
                (Field::Title, title),
                (Field::Content, content),
                (Field::Author, author),
            ] {
                if let Some(value) = value {
                    page.set(field, value);
                }
            }
            report(page.submit(&client).await)?;
        }
        Command::Delete { id, yes } => {
            let mut page = DetailPage::new(id);
            page.load(&client).await;

            let title = match page.view() {
                DetailView::Found(post) => post.title.clone(),
                _ => return Err(load_failed(&mut page, "Post not found")),
            };

            page.request_delete();
            let prompt = format!(
                "Delete \"{title}\"? This action cannot be undone. This will permanently delete the post."
            );
            if !yes && !confirm(&prompt).context("failed to read confirmation")? {
                page.cancel_delete();
                println!("Cancelled");
                return Ok(());
            }
            report(page.delete(&client).await)?;
        }
    }

    Ok(())
}
