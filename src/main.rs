// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]
use RustedPolyCalc::Examples::poly_examples::poly_examples;
use RustedPolyCalc::Utils::config::CalcConfig;
use RustedPolyCalc::Utils::logger::init_logger;
use RustedPolyCalc::calculator::Calculator;
use log::info;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match CalcConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = init_logger(&config) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    let result = match config.example {
        Some(example) => {
            info!("running example {}", example);
            poly_examples(example)
        }
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let stderr = io::stderr();
            Calculator::new()
                .run(stdin.lock(), &mut stdout.lock(), &mut stderr.lock())
                .map_err(Into::into)
        }
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
