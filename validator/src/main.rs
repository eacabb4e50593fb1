//! Headless validation for the compiled hello_kiacha module.
//!
//! Loads a `.wasm` artifact, instantiates it with wasmi, and checks the two
//! exported entry points against their contract: `add` sums with wraparound,
//! `greet` hands back a NUL-terminated greeting in exported linear memory.

use anyhow::{bail, Context, Result};
use clap::Parser;
use greeting::GREETING;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use wasmi::{Engine, Linker, Module, Store};

#[derive(Parser, Debug)]
#[command(name = "kiacha-validate")]
#[command(about = "Headless validation for the hello_kiacha WASM module")]
struct Args {
    /// Path to the compiled .wasm artifact
    module: PathBuf,

    /// Emit the validation report as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    module: String,
    size_bytes: usize,
    sum: i32,
    wrapped_sum: i32,
    greeting: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let wasm_bytes = fs::read(&args.module)
        .with_context(|| format!("reading {}", args.module.display()))?;
    let report = validate_module(&wasm_bytes, &args.module.display().to_string())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "WASM validation passed: add(7, 8) = {}, greet() = {:?}",
            report.sum, report.greeting
        );
    }
    Ok(())
}

fn validate_module(wasm_bytes: &[u8], name: &str) -> Result<Report> {
    if wasm_bytes.len() < 4 || &wasm_bytes[0..4] != b"\0asm" {
        bail!("not a WASM binary (missing magic number)");
    }

    let engine = Engine::default();
    let mut store = Store::new(&engine, ());
    let module = Module::new(&engine, wasm_bytes).context("parsing module")?;
    let linker = Linker::new(&engine);

    // The module boundary is two pure entry points; nothing may execute at
    // load time, so refuse modules that carry a start function.
    #[allow(deprecated)]
    let instance = linker
        .instantiate(&mut store, &module)
        .context("instantiating module")?
        .ensure_no_start(&mut store)
        .context("module has a start function")?;

    let add = instance
        .get_typed_func::<(i32, i32), i32>(&store, "add")
        .context("resolving export `add`")?;
    let greet = instance
        .get_typed_func::<(), i32>(&store, "greet")
        .context("resolving export `greet`")?;

    let sum = add.call(&mut store, (7, 8)).context("calling add(7, 8)")?;
    if sum != 15 {
        bail!("add(7, 8) returned {sum}, expected 15");
    }

    let reversed = add.call(&mut store, (8, 7)).context("calling add(8, 7)")?;
    if reversed != sum {
        bail!("add is not commutative: add(7, 8) = {sum} but add(8, 7) = {reversed}");
    }

    let wrapped_sum = add
        .call(&mut store, (i32::MAX, 1))
        .context("calling add(i32::MAX, 1)")?;
    if wrapped_sum != i32::MIN {
        bail!("add(i32::MAX, 1) returned {wrapped_sum}, expected wraparound to {}", i32::MIN);
    }

    let ptr = greet.call(&mut store, ()).context("calling greet()")?;
    let memory = instance
        .get_memory(&store, "memory")
        .context("module exports no linear memory `memory`")?;
    let found = read_cstr(memory.data(&store), ptr)?;
    if found != GREETING {
        bail!("greet() returned {found:?}, expected {GREETING:?}");
    }

    Ok(Report {
        module: name.to_string(),
        size_bytes: wasm_bytes.len(),
        sum,
        wrapped_sum,
        greeting: found.to_string(),
    })
}

/// Decode the NUL-terminated UTF-8 string at `ptr` inside a linear memory
/// image.
fn read_cstr(memory: &[u8], ptr: i32) -> Result<&str> {
    if ptr == 0 {
        bail!("greet() returned a null pointer");
    }
    let start = ptr as u32 as usize;
    if start >= memory.len() {
        bail!("greet() pointer {start} is outside linear memory ({} bytes)", memory.len());
    }

    let tail = &memory[start..];
    let len = tail
        .iter()
        .position(|&byte| byte == 0)
        .context("greeting is not NUL-terminated within linear memory")?;
    std::str::from_utf8(&tail[..len]).context("greeting is not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_with(text: &[u8], at: usize) -> Vec<u8> {
        let mut memory = vec![0xAAu8; at];
        memory.extend_from_slice(text);
        memory
    }

    #[test]
    fn test_read_cstr_decodes_greeting() {
        let memory = memory_with(b"Hello Kiacha from WASM (C++)\0", 1024);
        let found = read_cstr(&memory, 1024).unwrap();
        assert_eq!(found, GREETING);
    }

    #[test]
    fn test_read_cstr_rejects_null_pointer() {
        let memory = memory_with(b"hi\0", 16);
        let err = read_cstr(&memory, 0).unwrap_err();
        assert!(err.to_string().contains("null pointer"));
    }

    #[test]
    fn test_read_cstr_rejects_out_of_range_pointer() {
        let memory = memory_with(b"hi\0", 16);
        let err = read_cstr(&memory, 4096).unwrap_err();
        assert!(err.to_string().contains("outside linear memory"));
    }

    #[test]
    fn test_read_cstr_requires_nul_terminator() {
        let memory = memory_with(b"no terminator here", 8);
        let err = read_cstr(&memory, 8).unwrap_err();
        assert!(err.to_string().contains("NUL-terminated"));
    }

    #[test]
    fn test_read_cstr_requires_utf8() {
        let memory = memory_with(b"\xFF\xFE\0", 8);
        let err = read_cstr(&memory, 8).unwrap_err();
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn test_validate_module_rejects_non_wasm() {
        let err = validate_module(b"#!/bin/sh", "junk").unwrap_err();
        assert!(err.to_string().contains("magic number"));

        let err = validate_module(b"\0as", "short").unwrap_err();
        assert!(err.to_string().contains("magic number"));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = Report {
            module: "hello_kiacha.wasm".to_string(),
            size_bytes: 123,
            sum: 15,
            wrapped_sum: i32::MIN,
            greeting: GREETING.to_string(),
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"sum\":15"));
        assert!(json.contains("Hello Kiacha from WASM (C++)"));
    }
}
