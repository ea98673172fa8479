#[cfg(test)]
use std::cell::RefCell;
#[cfg(not(test))]
use std::env;
use std::ops::Deref;

// region ArgName
/// Every name an arg can be given on the command line, e.g. `-t` and `--template`.
pub struct ArgName<'a> {
    names: Vec<&'a str>,
}

impl<'a> From<&'a str> for ArgName<'a> {
    fn from(val: &'a str) -> Self {
        ArgName { names: vec![val] }
    }
}

impl<'a> From<Vec<&'a str>> for ArgName<'a> {
    fn from(val: Vec<&'a str>) -> Self {
        ArgName { names: val }
    }
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for ArgName<'a> {
    fn from(val: &'a [&'a str; N]) -> Self {
        ArgName {
            names: val.to_vec(),
        }
    }
}

impl<'a> Deref for ArgName<'a> {
    type Target = Vec<&'a str>;

    fn deref(&self) -> &Self::Target {
        &self.names
    }
}
// endregion

/// Retrieve the value of the first `--name=value` arg matching one of `arg_names`.
///
/// /!\ As this works on the process args,
/// wrap tests of functions relying on it with `with_env_args(args, fn)`.
pub fn retrieve_arg_value<'a, A>(arg_names: A) -> Option<String>
where
    A: Into<ArgName<'a>>,
{
    let args: Vec<String> = get_env_args();
    let arg_names = arg_names.into();
    for arg in args {
        for arg_name in arg_names.iter() {
            let arg_prefix = format!("{arg_name}=");
            if let Some(value) = arg.strip_prefix(&arg_prefix) {
                return Some(value.to_owned());
            }
        }
    }

    None
}

/// Retrieve an arg value, or `error_if_missing` when the arg hasn't been passed.
pub fn retrieve_expected_arg_value<'a, A, E>(arg_names: A, error_if_missing: E) -> Result<String, E>
where
    A: Into<ArgName<'a>>,
{
    retrieve_arg_value(arg_names).ok_or(error_if_missing)
}

#[cfg(not(test))]
fn get_env_args() -> Vec<String> {
    env::args().collect()
}

#[cfg(test)]
thread_local! {
    /// Args seen by `retrieve_arg_value` in tests, set by `with_env_args`.
    static ENV_ARGS: RefCell<Vec<String>> = const { RefCell::new(vec![]) };
}

#[cfg(test)]
fn get_env_args() -> Vec<String> {
    ENV_ARGS.with(|vec| vec.borrow().clone())
}

#[cfg(test)]
/// Run `function` as if `args` had been passed to the app.
/// Previous args are restored afterward.
pub fn with_env_args<F, T>(args: Vec<String>, function: F) -> T
where
    F: FnOnce() -> T,
{
    ENV_ARGS.with(|refcell| {
        let old_value = refcell.replace(args);
        let result = function();
        refcell.replace(old_value);
        result
    })
}

#[cfg(test)]
/// Same as `with_env_args`, for async functions.
/// They run on a current-thread runtime with paused time, so retry delays elapse instantly.
pub fn with_env_args_async<F, T>(args: Vec<String>, function: F) -> T
where
    F: AsyncFnOnce() -> T,
{
    ENV_ARGS.with(|refcell| {
        let old_value = refcell.replace(args);
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .start_paused(true)
            .build()
            .unwrap();
        let result = runtime.block_on(function());
        refcell.replace(old_value);
        result
    })
}
