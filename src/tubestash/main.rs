use chrono::Utc;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::PathBuf;
use tubestash::api::{CmdMessage, ConfirmAction, HypeDirection, LibraryFilter, MessageLevel, TubestashApi};
use tubestash::config::RetentionPolicy;
use tubestash::error::{Result, StashError};
use tubestash::model::{RemoteVideo, VideoItem};
use tubestash::store::fs::FileStore;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, CommentCommands, ConfirmActionArg, HypeArg, RetentionCommands, TemplateCommands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: TubestashApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Sync { snapshot } => handle_sync(&mut ctx, snapshot),
        Commands::Confirm { action } => handle_confirm(&mut ctx, action),
        Commands::List { orphans } => handle_list(&ctx, orphans),
        Commands::Show { video_id } => handle_show(&ctx, &video_id),
        Commands::Rate {
            video_id,
            rating,
            clear,
        } => handle_rate(&mut ctx, &video_id, rating, clear),
        Commands::Keep { video_id } => handle_keep(&mut ctx, &video_id),
        Commands::Delete { video_id } => handle_delete(&mut ctx, &video_id),
        Commands::Comment { action } => handle_comment(&mut ctx, action),
        Commands::Hype {
            video_id,
            direction,
        } => handle_hype(&mut ctx, &video_id, direction),
        Commands::Search {
            include,
            exclude,
            template,
        } => handle_search(&ctx, include, exclude, template),
        Commands::Template { action } => handle_template(&mut ctx, action),
        Commands::Retention { action } => handle_retention(&mut ctx, action),
        Commands::Settings { key, value } => handle_settings(&mut ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => match std::env::var_os("TUBESTASH_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => {
                let proj_dirs = ProjectDirs::from("com", "tubestash", "tubestash")
                    .ok_or_else(|| StashError::Store("Could not determine data dir".into()))?;
                proj_dirs.data_dir().to_path_buf()
            }
        },
    };

    let store = FileStore::new(data_dir);
    Ok(AppContext {
        api: TubestashApi::new(store),
    })
}

fn handle_sync(ctx: &mut AppContext, snapshot: PathBuf) -> Result<()> {
    let content = std::fs::read_to_string(&snapshot).map_err(StashError::Io)?;
    let fetched: Vec<RemoteVideo> =
        serde_json::from_str(&content).map_err(StashError::Serialization)?;

    let result = ctx.api.sync(fetched)?;
    if let Some(report) = &result.report {
        for item in &report.added {
            println!("{} {}", "+".green(), item.title);
        }
        for item in &report.orphaned {
            println!("{} {} ({})", "?".yellow(), item.title, item.video_id);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_confirm(ctx: &mut AppContext, action: ConfirmActionArg) -> Result<()> {
    let action = match action {
        ConfirmActionArg::KeepAll => ConfirmAction::KeepAll,
        ConfirmActionArg::DeleteAll => ConfirmAction::DeleteAll,
        ConfirmActionArg::Individual => ConfirmAction::Individual,
    };
    let result = ctx.api.confirm_sync(action)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, orphans: bool) -> Result<()> {
    let filter = if orphans {
        LibraryFilter::Orphans
    } else {
        LibraryFilter::All
    };
    let result = ctx.api.list(filter)?;
    print_items(&result.listed_items);
    if let Some(last_sync) = result.last_sync {
        println!("{}", format!("Last synced {}", time_ago(last_sync).trim()).dimmed());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, video_id: &str) -> Result<()> {
    let result = ctx.api.list(LibraryFilter::All)?;
    let item = result
        .listed_items
        .iter()
        .find(|i| i.video_id == video_id)
        .ok_or_else(|| StashError::ItemNotFound(video_id.to_string()))?;
    print_item_detail(item);
    Ok(())
}

fn handle_rate(
    ctx: &mut AppContext,
    video_id: &str,
    rating: Option<u8>,
    clear: bool,
) -> Result<()> {
    if rating.is_none() && !clear {
        return Err(StashError::Api("Provide a rating (1-5) or --clear".into()));
    }
    let result = ctx.api.update_rating(video_id, rating)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_keep(ctx: &mut AppContext, video_id: &str) -> Result<()> {
    let result = ctx.api.keep_item(video_id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, video_id: &str) -> Result<()> {
    let result = ctx.api.delete_item(video_id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_comment(ctx: &mut AppContext, action: CommentCommands) -> Result<()> {
    let result = match action {
        CommentCommands::Add { video_id, text } => ctx.api.add_comment(&video_id, &text)?,
        CommentCommands::Edit {
            video_id,
            index,
            text,
        } => ctx.api.update_comment(&video_id, index, &text)?,
        CommentCommands::Delete { video_id, index } => ctx.api.delete_comment(&video_id, index)?,
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_hype(ctx: &mut AppContext, video_id: &str, direction: HypeArg) -> Result<()> {
    let kind = match direction {
        HypeArg::Up => HypeDirection::Up,
        HypeArg::Down => HypeDirection::Down,
    };
    let result = ctx.api.update_hype(video_id, kind)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(
    ctx: &AppContext,
    include: Vec<String>,
    exclude: Vec<String>,
    template: Option<String>,
) -> Result<()> {
    let result = match template {
        Some(id) => ctx.api.search_template(&id)?,
        None => ctx.api.search(&include, &exclude)?,
    };
    print_items(&result.listed_items);
    print_messages(&result.messages);
    Ok(())
}

fn handle_template(ctx: &mut AppContext, action: TemplateCommands) -> Result<()> {
    match action {
        TemplateCommands::Save {
            name,
            include,
            exclude,
        } => {
            let result = ctx.api.save_template(&name, &include, &exclude)?;
            print_messages(&result.messages);
        }
        TemplateCommands::List => {
            let result = ctx.api.list_templates()?;
            if result.templates.is_empty() {
                println!("No templates saved.");
            }
            for template in &result.templates {
                println!(
                    "{}  {} ({} include, {} exclude)",
                    template.id.dimmed(),
                    template.name.bold(),
                    template.include.len(),
                    template.exclude.len()
                );
            }
        }
        TemplateCommands::Delete { template_id } => {
            let result = ctx.api.delete_template(&template_id)?;
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn handle_retention(ctx: &mut AppContext, action: RetentionCommands) -> Result<()> {
    match action {
        RetentionCommands::List => {
            let result = ctx.api.list_retention()?;
            if result.retention.is_empty() {
                println!("Retention list is empty.");
            }
            for entry in &result.retention {
                println!(
                    "{}  removed {}",
                    entry.video_id,
                    time_ago(entry.removed_at).trim().dimmed()
                );
            }
        }
        RetentionCommands::Restore { video_id } => {
            let result = ctx.api.restore_retention(&video_id)?;
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn handle_settings(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) | (Some("retention-policy"), None) => {
            let result = ctx.api.show_settings()?;
            if let Some(settings) = &result.settings {
                println!("retention-policy = {}", settings.retention_policy);
            }
        }
        (Some("retention-policy"), Some(v)) => {
            let policy: RetentionPolicy = v.parse().map_err(StashError::Api)?;
            let result = ctx.api.set_retention_policy(policy)?;
            print_messages(&result.messages);
        }
        (Some(other), _) => {
            println!("Unknown settings key: {}", other);
        }
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const ID_WIDTH: usize = 12;
const ORPHAN_MARKER: &str = "?";

fn print_items(items: &[VideoItem]) {
    if items.is_empty() {
        println!("No items found.");
        return;
    }

    for item in items {
        let marker = if item.is_orphan() {
            format!("{} ", ORPHAN_MARKER)
        } else {
            "  ".to_string()
        };

        let id_col = format!("{:<width$}", item.video_id, width = ID_WIDTH);

        let rating_col = match item.rating {
            Some(n) => format!("★{} ", n),
            None => "—  ".to_string(),
        };

        let title_line = if item.channel.is_empty() {
            item.title.clone()
        } else {
            format!("{} {}", item.title, item.channel)
        };

        let fixed_width = marker.width() + ID_WIDTH + 1 + rating_col.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title_display = truncate_to_width(&title_line, available);
        let padding = available.saturating_sub(title_display.width());

        let marker_colored = if item.is_orphan() {
            marker.yellow()
        } else {
            marker.normal()
        };

        println!(
            "{}{} {}{}{}{}",
            marker_colored,
            id_col.dimmed(),
            title_display,
            " ".repeat(padding),
            rating_col.cyan(),
            time_ago(item.added_at).dimmed()
        );
    }
}

fn print_item_detail(item: &VideoItem) {
    println!("{}", item.title.bold());
    println!("{}", item.channel);
    println!("https://www.youtube.com/watch?v={}", item.video_id);

    let rating = match item.rating {
        Some(n) => format!("{}/5", n),
        None => "unrated".to_string(),
    };
    let mut line = format!("{}  +{} -{}", rating, item.hype_up, item.hype_down);
    if let Some(code) = &item.duration {
        if let Some(pretty) = format_duration(code) {
            line.push_str(&format!("  {}", pretty));
        }
    }
    if item.is_orphan() {
        line.push_str("  (no longer in the remote source)");
    }
    println!("{}", line);

    if !item.comments.is_empty() {
        println!();
        for (i, comment) in item.comments.iter().enumerate() {
            println!("  #{} {}", i, comment);
        }
    }

    if let Some(topics) = &item.topics {
        if !topics.is_empty() {
            println!();
            let names: Vec<String> = topics.iter().map(|t| format_topic(t)).collect();
            println!("Topics: {}", names.join(", "));
        }
    }

    if let Some(tags) = &item.tags {
        if !tags.is_empty() {
            println!();
            let shown: Vec<String> = tags.iter().take(15).map(|t| format!("#{}", t)).collect();
            let mut tag_line = shown.join(" ");
            if tags.len() > 15 {
                tag_line.push_str(&format!(" +{} more", tags.len() - 15));
            }
            println!("{}", tag_line.dimmed());
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    // Pad singular units so the column lines up with plural ones.
    let time_str = time_str
        .replace("hour ago", "hour  ago")
        .replace("minute ago", "minute  ago")
        .replace("second ago", "second  ago")
        .replace("day ago", "day  ago")
        .replace("week ago", "week  ago")
        .replace("month ago", "month  ago")
        .replace("year ago", "year  ago");

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

/// Renders an ISO-8601 duration code (`PT5M47S`) as `5:47`. Anything that
/// does not parse renders nothing rather than something wrong.
fn format_duration(code: &str) -> Option<String> {
    let rest = code.strip_prefix("PT")?;
    let mut hours = 0u32;
    let mut minutes = 0u32;
    let mut seconds = 0u32;
    let mut num = String::new();

    for c in rest.chars() {
        if c.is_ascii_digit() {
            num.push(c);
        } else {
            let value: u32 = num.parse().ok()?;
            num.clear();
            match c {
                'H' => hours = value,
                'M' => minutes = value,
                'S' => seconds = value,
                _ => return None,
            }
        }
    }
    if !num.is_empty() {
        return None;
    }

    if hours > 0 {
        Some(format!("{}:{:02}:{:02}", hours, minutes, seconds))
    } else {
        Some(format!("{}:{:02}", minutes, seconds))
    }
}

/// Topic refs arrive as wiki URLs; show just the page name.
fn format_topic(url: &str) -> String {
    match url.rsplit_once("/wiki/") {
        Some((_, name)) => name.replace('_', " "),
        None => url.to_string(),
    }
}
