//! snmpq-walk: Walk an SNMP subtree through the poller query path.
//!
//! Part of the snmp-query CLI utilities.

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use snmp_query::Client;
use snmp_query::cli::args::{CommonArgs, OutputArgs, ToolArgs, V3Args, build_request};
use snmp_query::cli::hints::parse_oid;
use snmp_query::cli::output::{OutputContext, write_error};

/// Walk an SNMP subtree.
///
/// Uses snmpbulkwalk with -Cr<max-oids> for SNMPv2c/v3 when it is installed,
/// and snmpwalk otherwise.
#[derive(Debug, Parser)]
#[command(name = "snmpq-walk", version, about)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    #[command(flatten)]
    v3: V3Args,

    #[command(flatten)]
    tools: ToolArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Subtree root (dotted notation or well-known name).
    #[arg(value_name = "OID", default_value = "1.3.6.1.2.1")]
    oid: String,
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

    let oid = match parse_oid(&args.oid) {
        Ok(oid) => oid,
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
    let records = match client.try_walk(&request, &oid).await {
        Ok(records) => records,
        Err(e) => {
            write_error(&e);
            return ExitCode::FAILURE;
        }
    };
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
