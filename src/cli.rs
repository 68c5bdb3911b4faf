use clap::Parser;

#[derive(Parser)]
#[command(name = "idorminer")]
#[command(version, about = "Sequential IDOR sweep scanner for parameterized endpoints")]
pub struct Cli {
    #[arg(long)]
    pub url: String,

    #[arg(long)]
    pub range: String,

    #[arg(short = 'H', long = "header")]
    pub headers: Vec<String>,

    #[arg(long, default_value = "GET")]
    pub method: String,

    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(short, long, default_value = "1")]
    pub concurrency: usize,
}
