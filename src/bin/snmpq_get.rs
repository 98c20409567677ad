//! snmpq-get: Retrieve SNMP OID values through the poller query path.
//!
//! Part of the snmp-query CLI utilities.

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use snmp_query::cli::args::{CommonArgs, OutputArgs, ToolArgs, V3Args, build_request};
use snmp_query::cli::hints::parse_oid;
use snmp_query::cli::output::{OutputContext, write_error};
use snmp_query::{Client, WalkRecord};

/// Retrieve one or more SNMP OID values.
#[derive(Debug, Parser)]
#[command(name = "snmpq-get", version, about)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    #[command(flatten)]
    v3: V3Args,

    #[command(flatten)]
    tools: ToolArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Fetch the value following each OID (GETNEXT).
    #[arg(long = "next")]
    next: bool,

    /// OIDs to retrieve (dotted notation or well-known names).
    #[arg(required = true, value_name = "OID")]
    oids: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    args.output.init_tracing();

    if let Err(e) = args.v3.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let request = match build_request(&args.common, &args.v3) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let oids: Vec<String> = match args.oids.iter().map(|s| parse_oid(s)).collect() {
        Ok(oids) => oids,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let config = args.tools.config();
    let target = match request.resolve(&config) {
        Ok(target) => target,
        Err(e) => {
            write_error(&e);
            return ExitCode::FAILURE;
        }
    };

    let client = Client::new(config);
    let start = Instant::now();
    let mut records = Vec::with_capacity(oids.len());
    for oid in &oids {
        let result = if args.next {
            client.try_get_next(&request, oid).await
        } else {
            client.try_get(&request, oid).await
        };
        match result {
            Ok(value) => records.push(WalkRecord::new(oid.trim_start_matches('.'), value)),
            Err(e) => {
                write_error(&e);
                return ExitCode::FAILURE;
            }
        }
    }
    let elapsed = start.elapsed();

    let output_ctx = OutputContext {
        format: args.output.format,
        show_hints: !args.output.no_hints,
        show_timing: args.output.timing,
    };
    let timing = args.output.timing.then_some(elapsed);

    if let Err(e) = output_ctx.write_results(&target.to_string(), target.version, &records, timing)
    {
        eprintln!("Error writing output: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
