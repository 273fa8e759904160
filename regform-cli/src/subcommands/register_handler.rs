use regform::{
    EnvironmentConfig, FieldName, FormController, RawInput,
    RegistrationHandler,
};

pub async fn handle_register(
    matches: &clap::ArgMatches,
    config: &EnvironmentConfig,
) -> i32 {
    let mut controller = FormController::new();
    apply_matches(&mut controller, matches);

    if !controller.is_submittable() {
        // untouched fields carry no error yet, show the full picture
        if let Err(errors) =
            regform::FormSchema::registration().validate(controller.values())
        {
            for (field, message) in errors.iter() {
                eprintln!("{}: {}", field, message);
            }
        }
        return 1;
    }

    if matches.get_flag("dry-run") {
        println!("Registration is valid");
        return 0;
    }

    let handler = match RegistrationHandler::new(config.clone()) {
        Ok(handler) => handler,
        Err(err) => {
            eprintln!("{}", err);
            return 1;
        }
    };
    log::info!("Submitting to {}", handler.endpoint());

    let result = controller.submit(&handler).await;
    if result.is_success() {
        println!("{}", result);
        0
    } else {
        eprintln!("{}", result);
        1
    }
}

pub(crate) fn apply_matches(
    controller: &mut FormController,
    matches: &clap::ArgMatches,
) {
    if let Some(username) = matches.get_one::<String>("username") {
        controller.on_field_change(FieldName::Username, RawInput::text(username));
    }
    if let Some(language) = matches.get_one::<String>("fav-language") {
        controller
            .on_field_change(FieldName::FavLanguage, RawInput::radio(language));
    }
    if let Some(food) = matches.get_one::<String>("fav-food") {
        controller.on_field_change(FieldName::FavFood, RawInput::select(food));
    }
    controller.on_field_change(
        FieldName::Agreement,
        RawInput::checkbox(matches.get_flag("agree")),
    );
}
