// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::io::{self, Read, Write};
use template_preprocessors::apply_preprocessors;
use template_preprocessors::config::{default_registry, load_registry, PreprocessorRegistry};
use tracing_subscriber::EnvFilter;

const PROGRAM_NAME: &str = "template-preprocess";

struct Args {
    help: bool,
    config: Option<String>,
    template: Option<String>,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [--config <preprocessors.yaml>] [--] [<template-file>]", program);
    eprintln!("Reads the template from stdin when no file is given and writes the result to stdout.");
    eprintln!("Arguments after `--` are always treated as the template path.");
    eprintln!("Example: {} templates/request.json", program);
    eprintln!("Example: echo 'id={{{{randstr}}}}' | {} --config configs/default.yaml", program);
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut help = false;
    let mut config = None;
    let mut template = None;
    let mut options_done = false;
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--" if !options_done => options_done = true,
            "-h" | "--help" if !options_done => help = true,
            "--config" | "-c" if !options_done => {
                let path = iter.next().context("--config requires a file path")?;
                if config.is_some() {
                    bail!("--config given more than once");
                }
                config = Some(path.clone());
            }
            _ if template.is_none() => template = Some(arg.clone()),
            _ => bail!("unexpected argument '{}'", arg),
        }
    }

    Ok(Args { help, config, template })
}

fn run(args: &Args) -> Result<()> {
    let configured;
    let registry: &PreprocessorRegistry = match &args.config {
        Some(path) => {
            configured = load_registry(path)
                .with_context(|| format!("failed to load preprocessor config '{}'", path))?;
            &configured
        }
        None => default_registry(),
    };

    let input = match &args.template {
        Some(path) => fs::read(path).with_context(|| format!("failed to read template '{}'", path))?,
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read template from stdin")?;
            buf
        }
    };

    let output = apply_preprocessors(&registry.get_preprocessors(None), input);

    let mut stdout = io::stdout().lock();
    stdout.write_all(&output).context("failed to write output")?;
    stdout.flush().context("failed to write output")?;
    Ok(())
}

fn main() {
    // stdout carries the rendered template, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or(PROGRAM_NAME);

    let parsed = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("❌ {}", e);
            print_usage(program);
            std::process::exit(1);
        }
    };

    if parsed.help {
        print_usage(program);
        return;
    }

    if let Err(e) = run(&parsed) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}
