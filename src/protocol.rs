//! Request/reply framing of the logger's proprietary protocol.

mod frame;
mod reply;

pub use self::{
    frame::Request,
    reply::{MAX_REPLY_LEN, decode},
};

#[cfg(test)]
pub use self::reply::build_reply;
