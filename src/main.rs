use devconf::{
    cli::{get_args, get_log_level_from_verbose, run},
    error::default_error_handler,
    i18n::Messages,
    interrupt,
};

fn main() {
    let args = get_args();
    env_logger::Builder::new().filter_level(get_log_level_from_verbose(args.verbose)).init();

    let messages = Messages::new();
    if let Err(err) = interrupt::install_handler().and_then(|()| run(args, &messages)) {
        default_error_handler(err, &messages);
    }
}
