mod time;

pub use self::time::format_timestamp;
