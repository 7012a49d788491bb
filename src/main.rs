use clap::{Parser, Subcommand};
use radixglyph::cli::{
    decode_file, encode_file, escape_file, hide_in_file, reveal_file, show_inspection,
    split_file, unescape_file, DecodeOptions, EncodeOptions, EscapeOptions,
};
use radixglyph::config::{Radix, Scheme, Strictness};
use radixglyph::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("RADIXGLYPH_VERSION");
const BUILD: &str = env!("RADIXGLYPH_BUILD");
const PROFILE: &str = env!("RADIXGLYPH_PROFILE");
const GIT_HASH: &str = env!("RADIXGLYPH_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "radixglyph")]
#[command(author, about = "Radix text codecs and zero-width text embedding", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a file's bytes as radix text
    #[command(alias = "e")]
    Encode {
        /// Input file
        input: PathBuf,

        /// Output file (stdout when omitted)
        output: Option<PathBuf>,

        /// Radix: base16, base32, base64, base64url or base85
        #[arg(long, default_value = "base64", value_parser = parse_radix)]
        radix: Radix,

        /// Custom alphabet (must match the radix size)
        #[arg(long)]
        alphabet: Option<String>,

        /// JSON codec configuration
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Decode radix text back into bytes
    #[command(alias = "d")]
    Decode {
        /// Input file
        input: PathBuf,

        /// Output file (stdout when omitted)
        output: Option<PathBuf>,

        /// Radix: base16, base32, base64, base64url or base85
        #[arg(long, default_value = "base64", value_parser = parse_radix)]
        radix: Radix,

        /// Custom alphabet (must match the radix size)
        #[arg(long)]
        alphabet: Option<String>,

        /// Skip characters outside the alphabet instead of failing
        #[arg(long)]
        permissive: bool,

        /// JSON codec configuration
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Escape text as Morse code, URL percent-encoding or HTML entities
    Escape {
        /// Input file
        input: PathBuf,

        /// Output file (stdout when omitted)
        output: Option<PathBuf>,

        /// Scheme: morse, url or html
        #[arg(long, value_parser = parse_scheme)]
        scheme: Scheme,

        /// Drop characters the scheme cannot represent instead of failing
        #[arg(long)]
        permissive: bool,

        /// JSON codec configuration
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Reverse an escaping scheme
    Unescape {
        /// Input file
        input: PathBuf,

        /// Output file (stdout when omitted)
        output: Option<PathBuf>,

        /// Scheme: morse, url or html
        #[arg(long, value_parser = parse_scheme)]
        scheme: Scheme,

        /// Keep unknown sequences instead of failing
        #[arg(long)]
        permissive: bool,

        /// JSON codec configuration
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Hide the text of one file inside the text of another
    #[command(alias = "h")]
    Hide {
        /// Visible carrier text file
        carrier: PathBuf,

        /// Text file to hide
        hidden: PathBuf,

        /// Output file (stdout when omitted)
        output: Option<PathBuf>,
    },

    /// Show the visible and hidden text of a file
    #[command(alias = "r")]
    Reveal {
        /// File with embedded text
        input: PathBuf,
    },

    /// Insert a zero-width space after every character
    Split {
        /// Input file
        input: PathBuf,

        /// Output file (stdout when omitted)
        output: Option<PathBuf>,
    },

    /// Report invisible characters in a file
    #[command(alias = "i")]
    Inspect {
        /// File to inspect
        file: PathBuf,
    },
}

fn parse_radix(s: &str) -> std::result::Result<Radix, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn parse_scheme(s: &str) -> std::result::Result<Scheme, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn write_output(output: Option<&Path>, data: &[u8]) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, data)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.version {
        println!("radixglyph {}", get_version());
        return ExitCode::SUCCESS;
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            let _ = Cli::command().print_help();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encode {
            input,
            output,
            radix,
            alphabet,
            config,
        } => {
            let options = EncodeOptions {
                radix,
                alphabet,
                config,
            };
            encode_file(&input, &options).and_then(|mut text| {
                if output.is_none() {
                    text.push('\n');
                }
                write_output(output.as_deref(), text.as_bytes())
            })
        }

        Commands::Decode {
            input,
            output,
            radix,
            alphabet,
            permissive,
            config,
        } => {
            let options = DecodeOptions {
                radix,
                alphabet,
                strictness: permissive.then_some(Strictness::Permissive),
                config,
            };
            decode_file(&input, &options).and_then(|data| write_output(output.as_deref(), &data))
        }

        Commands::Escape {
            input,
            output,
            scheme,
            permissive,
            config,
        } => {
            let options = EscapeOptions {
                scheme,
                strictness: permissive.then_some(Strictness::Permissive),
                config,
            };
            escape_file(&input, &options).and_then(|mut text| {
                if output.is_none() {
                    text.push('\n');
                }
                write_output(output.as_deref(), text.as_bytes())
            })
        }

        Commands::Unescape {
            input,
            output,
            scheme,
            permissive,
            config,
        } => {
            let options = EscapeOptions {
                scheme,
                strictness: permissive.then_some(Strictness::Permissive),
                config,
            };
            unescape_file(&input, &options)
                .and_then(|text| write_output(output.as_deref(), text.as_bytes()))
        }

        Commands::Hide {
            carrier,
            hidden,
            output,
        } => hide_in_file(&carrier, &hidden)
            .and_then(|combined| write_output(output.as_deref(), combined.as_bytes())),

        Commands::Reveal { input } => match reveal_file(&input) {
            Ok(extracted) => {
                println!("Visible: {}", extracted.visible);
                println!("Hidden: {}", extracted.hidden);
                Ok(())
            }
            Err(e) => Err(e),
        },

        Commands::Split { input, output } => split_file(&input)
            .and_then(|text| write_output(output.as_deref(), text.as_bytes())),

        Commands::Inspect { file } => match show_inspection(&file) {
            Ok(report) => {
                print!("{}", report);
                Ok(())
            }
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
