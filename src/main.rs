use clap::{Arg, Command};
use tafqit::{LabelCatalog, Language, amount_to_words, currency};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("tafqit")
        .version("0.1.0")
        .about("Write cheque amounts in words (Arabic and English)")
        .arg(
            Arg::new("amount")
                .help("Integer amount (may be negative)")
                .required_unless_present("list-currencies")
                .allow_hyphen_values(true)
                .index(1),
        )
        .arg(
            Arg::new("subunit")
                .help("Subunit amount (fils, piasters, cents, ...)")
                .index(2),
        )
        .arg(
            Arg::new("currency")
                .long("currency")
                .short('c')
                .help("Currency code (default: JOD)")
                .default_value("JOD"),
        )
        .arg(
            Arg::new("lang")
                .long("lang")
                .short('l')
                .help("Target language tag (ar or en)")
                .default_value("ar"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show a labeled breakdown of the inputs")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-currencies")
                .long("list-currencies")
                .help("List supported currency codes and exit")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-currencies") {
        for code in currency::codes() {
            let definition = currency::lookup(code);
            println!(
                "{}  {} / {}",
                code,
                definition.main_unit(Language::English).singular,
                definition.main_unit(Language::Arabic).singular
            );
        }
        return Ok(());
    }

    let amount: i64 = matches
        .get_one::<String>("amount")
        .unwrap()
        .parse()
        .map_err(|e| format!("invalid amount: {}", e))?;
    let subunit: u32 = match matches.get_one::<String>("subunit") {
        Some(raw) => raw
            .parse()
            .map_err(|e| format!("invalid subunit amount: {}", e))?,
        None => 0,
    };
    let code = matches.get_one::<String>("currency").unwrap();
    let lang_tag = matches.get_one::<String>("lang").unwrap();
    let verbose = matches.get_flag("verbose");

    let Some(language) = Language::from_tag(lang_tag) else {
        return Err(format!("unsupported language tag '{}' (expected ar or en)", lang_tag).into());
    };

    // The engine trusts callers to respect the subunit digit width, so the
    // CLI checks it here before converting
    let definition = currency::lookup(code);
    if subunit >= definition.subunit_limit() {
        return Err(format!(
            "subunit amount {} does not fit the {}-digit subunit of {}",
            subunit,
            definition.subunit_digits(),
            definition.code()
        )
        .into());
    }

    let phrase = amount_to_words(amount, subunit, code, language)?;

    if verbose {
        let labels = LabelCatalog::embedded();
        println!("📝 {}: {}", labels.label(language, "amount"), amount);
        println!("   {}: {}", labels.label(language, "piasters"), subunit);
        println!(
            "   {}: {} ({})",
            labels.label(language, "currency"),
            definition.code(),
            language
        );
        println!();
    }

    println!("{}", phrase);

    Ok(())
}
