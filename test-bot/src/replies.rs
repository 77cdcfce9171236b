//! Reply texts.

use chrono::{DateTime, SecondsFormat, Utc};
use dbot_core::{Chat, User};

/// Placeholder for missing optional fields in `/info`.
pub const NOT_AVAILABLE: &str = "N/A";
/// Greeting name when the sender has no first name.
pub const DEFAULT_USER_NAME: &str = "User";
pub const ECHO_PREFIX: &str = "🔄 Echo: ";
pub const ECHO_USAGE: &str = "Please provide text to echo. Usage: /echo [text]";

pub const HELP: &str = "📚 Help - Test Bot Commands

Commands:
• /start - Welcome message
• /help - This help message
• /ping - Test bot responsiveness
• /info - Bot information
• /echo [text] - Echo your message

Features:
• Responds to text messages
• Handles basic commands
• Shows bot status
• Simple echo functionality

This is a test bot to verify the platform is working correctly! 🚀";

pub fn welcome(user: &User) -> String {
    let name = user.first_name.as_deref().unwrap_or(DEFAULT_USER_NAME);
    format!(
        "👋 Hello {name}!

Welcome to the Test Bot! 🎉

Available commands:
• /start - Show this welcome message
• /help - Show help information
• /ping - Test if bot is responsive
• /info - Show bot information
• /echo [text] - Echo back your message

Try sending me a message or use one of the commands above!"
    )
}

/// Timestamp is rendered as RFC 3339 (ISO-8601) in UTC with milliseconds.
pub fn pong(now: DateTime<Utc>) -> String {
    format!(
        "🏓 Pong! Bot is alive and responsive!\n⏰ Time: {}",
        now.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}

pub fn info(chat: &Chat, user: &User) -> String {
    let or_na = |value: &Option<String>| value.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string());
    format!(
        "ℹ️ Bot Information

Chat Details:
• Chat ID: {chat_id}
• Chat Type: {chat_type}
• Chat Title: {chat_title}

User Details:
• User ID: {user_id}
• Username: {username}
• First Name: {first_name}
• Last Name: {last_name}

Bot Status: ✅ Running
Platform: Telegram Bot Hosting Platform
Language: Rust",
        chat_id = chat.id,
        chat_type = chat.chat_type,
        chat_title = or_na(&chat.title),
        user_id = user.id,
        username = or_na(&user.username),
        first_name = or_na(&user.first_name),
        last_name = or_na(&user.last_name),
    )
}

/// `None` when there is nothing to echo.
pub fn echo(args: &[String]) -> Option<String> {
    if args.is_empty() {
        return None;
    }
    Some(format!("{}{}", ECHO_PREFIX, args.join(" ")))
}

pub fn free_text(text: &str) -> String {
    format!(
        "📝 You said: \"{text}\"

This is a test bot response. The platform is working correctly! 🎉

Try using commands like /help or /ping to test more features."
    )
}
