use clap::{Arg, ArgAction, Command};

pub use super::register_handler::handle_register;

pub fn register_subcommand() -> Command {
    Command::new("register")
        .about("Validates a registration and posts it to the endpoint")
        .after_help(
            "Fields that are not given keep their empty default and are \
             validated as such.",
        )
        .arg(
            Arg::new("username")
                .long("username")
                .short('u')
                .help("Username, 3 to 20 characters"),
        )
        .arg(
            Arg::new("fav-language")
                .long("fav-language")
                .short('l')
                .help("Favorite language (javascript, rust)"),
        )
        .arg(
            Arg::new("fav-food")
                .long("fav-food")
                .short('f')
                .help("Favorite food (broccoli, spaghetti, pizza)"),
        )
        .arg(
            Arg::new("agree")
                .long("agree")
                .short('a')
                .action(ArgAction::SetTrue)
                .help("Agree to our terms"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .short('n')
                .action(ArgAction::SetTrue)
                .help("Only validate, do not submit"),
        )
}
