//! Fixed console lines

/// Printed once before anything else
pub const BANNER: &str = "🚀 Запуск бота...";

/// Sent through the notifier once at startup
pub const STARTUP_MESSAGE: &str = "🤖 Бот запущен на Render и работает 24/7!";

/// Printed once the startup sequence is complete
pub const RUNNING: &str = "✅ Бот работает. Ожидание событий...";

/// Printed once per heartbeat interval
pub const ALIVE: &str = "⏳ Бот жив, работает...";
