use structopt::clap::{AppSettings, Shell};
use structopt::StructOpt;
use structopt_flags::QuietVerbose;

#[derive(Debug)]
pub struct AppConfig {
    pub index: i64,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "fruit-lookup",
    about = "Print the name of the fruit stored at an index of the property table",
    setting = AppSettings::AllowNegativeNumbers
)]
pub struct Opt {
    #[structopt(flatten)]
    pub verbose: QuietVerbose,

    #[structopt(
        parse(try_from_str),
        required_unless = "completions",
        help = "Table index"
    )]
    index: Option<i64>,

    #[structopt(long, possible_values = &Shell::variants(), case_insensitive = true, help = "Generate shell completions and exit")]
    pub completions: Option<Shell>,
}

impl Opt {
    pub fn to_app_config(self) -> Result<AppConfig, &'static str> {
        Ok(AppConfig {
            index: self.index.ok_or("Index is required")?,
        })
    }
}
