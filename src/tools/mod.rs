use std::fmt::Debug;

pub mod env_args;

/// Log an error along with a message, for use with `inspect_err`.
pub fn log_message<E: Debug>(message: &str) -> impl FnOnce(E) {
    move |e| {
        debug!("{message}\n{e:#?}");
    }
}

/// Log an error along with a message, then replace the error with `value_to_return`.
pub fn log_message_and_return<E: Debug, T>(
    message: &str,
    value_to_return: T,
) -> impl FnOnce(E) -> T {
    move |e| {
        error!("{message}\n{e:#?}");
        value_to_return
    }
}
