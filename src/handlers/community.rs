use crate::events::NewEvent;
use crate::i18n;
use crate::users::UserDirectory;

use super::{Ctx, HandlerResult};

const LEADERBOARD_SIZE: usize = 10;

/// Telegram's message length limit, in UTF-16 code units.
const MESSAGE_LIMIT: usize = 4096;

pub async fn events(ctx: &Ctx<'_>) -> HandlerResult {
    let events = ctx.app.events.list();
    if events.is_empty() {
        return ctx.main_menu(i18n::EVENTS_EMPTY.get(ctx.lang)).await;
    }

    let mut text = format!("{}\n\n", i18n::EVENTS_HEADER.get(ctx.lang));
    for event in &events {
        text.push_str(&event.render());
        text.push('\n');
    }
    ctx.main_menu(&text).await
}

pub async fn leaderboard(ctx: &Ctx<'_>) -> HandlerResult {
    let leaders = ctx.app.users.leaderboard(LEADERBOARD_SIZE);
    if leaders.is_empty() {
        return ctx.main_menu(i18n::LEADERBOARD_EMPTY.get(ctx.lang)).await;
    }

    let mut text = format!("{}\n\n", i18n::LEADERBOARD_HEADER.get(ctx.lang));
    for (place, leader) in leaders.iter().enumerate() {
        text.push_str(&i18n::leaderboard_line(
            ctx.lang,
            place + 1,
            &leader.name,
            leader.score,
        ));
        text.push('\n');
    }
    ctx.main_menu(&text).await
}

pub async fn list_users(ctx: &Ctx<'_>) -> HandlerResult {
    if !ctx.app.config.is_admin(ctx.user_id) {
        return ctx.say_plain(i18n::NO_ACCESS.get(ctx.lang)).await;
    }

    let users = ctx.app.users.list_users();
    if users.is_empty() {
        return ctx.say_plain(i18n::USERS_EMPTY.get(ctx.lang)).await;
    }

    let header = format!("👥 {}\n", users.len());
    let lines = users
        .iter()
        .map(|user| format!("• {} — {}", user.id, user.display_name()));
    for message in pack_lines(std::iter::once(header).chain(lines), MESSAGE_LIMIT) {
        ctx.say_plain(&message).await?;
    }
    Ok(())
}

pub async fn add_event(ctx: &Ctx<'_>, args: &str) -> HandlerResult {
    if !ctx.app.config.is_admin(ctx.user_id) {
        return ctx.say_plain(i18n::NO_ACCESS.get(ctx.lang)).await;
    }

    let Some(new_event) = NewEvent::parse(args) else {
        return ctx.say_plain(i18n::EVENT_USAGE.get(ctx.lang)).await;
    };
    let event = ctx.app.events.add(new_event)?;
    log::info!("Admin {} added event {} ({})", ctx.user_id, event.id, event.title);
    ctx.say_plain(i18n::EVENT_ADDED.get(ctx.lang)).await
}

/// Joins lines into as few messages as fit within `limit`. A line longer than
/// `limit` on its own is cut.
fn pack_lines(lines: impl IntoIterator<Item = String>, limit: usize) -> Vec<String> {
    let mut messages = Vec::new();
    let mut current = String::new();
    let mut used = 0;

    for line in lines {
        let line = truncate_utf16(&line, limit);
        let len = line.encode_utf16().count();
        if !current.is_empty() && used + 1 + len > limit {
            messages.push(std::mem::take(&mut current));
            used = 0;
        }
        if !current.is_empty() {
            current.push('\n');
            used += 1;
        }
        current.push_str(line);
        used += len;
    }

    if !current.is_empty() {
        messages.push(current);
    }
    messages
}

fn truncate_utf16(line: &str, limit: usize) -> &str {
    let mut used = 0;
    for (i, c) in line.char_indices() {
        used += c.len_utf16();
        if used > limit {
            return &line[..i];
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(count: usize, width: usize) -> Vec<String> {
        (0..count).map(|i| format!("{:0width$}", i, width = width)).collect()
    }

    #[test]
    fn short_list_fits_one_message() {
        let packed = pack_lines(lines(3, 2), MESSAGE_LIMIT);
        assert_eq!(packed, vec!["00\n01\n02".to_string()]);
    }

    #[test]
    fn long_list_is_split_without_losing_lines() {
        let input = lines(1000, 20);
        let packed = pack_lines(input.clone(), MESSAGE_LIMIT);

        assert!(packed.len() > 1);
        for message in &packed {
            assert!(message.encode_utf16().count() <= MESSAGE_LIMIT);
        }
        let rejoined: Vec<String> = packed
            .iter()
            .flat_map(|message| message.split('\n').map(str::to_string))
            .collect();
        assert_eq!(rejoined, input);
    }

    #[test]
    fn limit_counts_utf16_units() {
        // Each emoji is two UTF-16 units.
        let packed = pack_lines(vec!["👥👥".to_string(), "👥".to_string()], 5);
        assert_eq!(packed, vec!["👥👥".to_string(), "👥".to_string()]);

        let cut = pack_lines(vec!["ab👥cd".to_string()], 3);
        assert_eq!(cut, vec!["ab".to_string()]);
    }
}
