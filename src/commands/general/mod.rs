mod info;
mod ping;
mod say;
mod serverinfo;

pub use info::execute as info;
pub use ping::execute as ping;
pub use say::execute as say;
pub use serverinfo::execute as serverinfo;
