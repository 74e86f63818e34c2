//! `rhi_sc` command line shader compiler
//!
//! Compiles each input file to the output at the same position and stops
//! at the first failure.

use std::process::ExitCode;

use clap::Parser;
use rhi_sc::log::{DefaultLogger, Log, LogSeverity};
use rhi_sc::{BackendKind, Compiler, ShaderSource, sc_info};

mod args;

use args::Cli;

const LOG_SOURCE: &str = "rhi_sc::cli";

fn create_compiler(cli: &Cli) -> rhi_sc::Result<Compiler> {
    match cli.backend {
        #[cfg(feature = "dxc")]
        BackendKind::Dxc => {
            let config = rhi_sc_dxc::DxcConfig {
                library_path: cli.dxc_path.clone(),
                output: if cli.spirv {
                    rhi_sc_dxc::DxcOutput::Spirv
                } else {
                    rhi_sc_dxc::DxcOutput::Dxil
                },
                ..Default::default()
            };
            Ok(Compiler::new(rhi_sc_dxc::DxcBackend::new(config)?))
        }
        #[cfg(feature = "shaderc")]
        BackendKind::Shaderc => {
            let backend = rhi_sc_shaderc::ShadercBackend::new(rhi_sc_shaderc::ShadercConfig::default())?;
            Ok(Compiler::new(backend))
        }
        #[allow(unreachable_patterns)]
        other => Err(rhi_sc::Error::BackendUnavailable(format!(
            "the {} backend was not built into this binary",
            other
        ))),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        Log::set_logger(DefaultLogger::new(LogSeverity::Debug));
    }

    if cli.inputs.len() != cli.outputs.len() {
        eprintln!(
            "error: {} input(s) but {} output(s); every input needs one output",
            cli.inputs.len(),
            cli.outputs.len()
        );
        return ExitCode::FAILURE;
    }

    let mut compiler = match create_compiler(&cli) {
        Ok(compiler) => compiler,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let options = cli.compile_options();

    for (input, output) in cli.inputs.iter().zip(&cli.outputs) {
        let source = ShaderSource::from_file(input.clone(), cli.stage);
        let result = compiler.compile_to_file(&source, &options, output);

        if !result.is_success() {
            eprintln!("{}: {}", input.display(), result.error);
            if !result.messages.is_empty() {
                eprintln!("{}", result.messages);
            }
            return ExitCode::FAILURE;
        }

        if result.warning_count > 0 {
            eprintln!("{}: {} warning(s)", input.display(), result.warning_count);
            eprintln!("{}", result.messages);
        }

        sc_info!(LOG_SOURCE, "{} -> {}", input.display(), output.display());
    }

    ExitCode::SUCCESS
}
