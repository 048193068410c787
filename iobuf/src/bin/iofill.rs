// SPDX-License-Identifier: Apache-2.0

//! Copies a file, or standard input, to standard output through a series of
//! fixed-capacity buffers.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use log::{debug, error, info};
use iobuf::{IoBuffer, Status};
use iobuf::streams::{FileSource, ReaderSource, Source};

#[derive(Debug, Parser)]
#[command(version, about = "Copy input to stdout through fixed-capacity buffers")]
struct Args {
	/// The file to read. Reads standard input if absent.
	path: Option<PathBuf>,
	/// The maximum number of bytes requested by each fill.
	#[arg(short, long, default_value_t = 4096, value_parser = chunk_parser())]
	chunk: usize,
}

/// Totals collected while copying.
#[derive(Copy, Clone, Debug, Default)]
struct Summary {
	buffers: usize,
	bytes: usize,
	fills: usize,
}

/// Parses a nonzero chunk size, rejecting values that don't fit in a `usize`.
fn chunk_parser() -> impl clap::builder::TypedValueParser<Value = usize> {
	use clap::builder::TypedValueParser;

	clap::value_parser!(u64)
		.range(1..=usize::MAX as u64)
		.map(|chunk| chunk as usize)
}

fn main() -> ExitCode {
	env_logger::init();
	let args = Args::parse();
	let chunk = args.chunk;
	let stdout = io::stdout();
	let mut out = stdout.lock();

	let result = match &args.path {
		Some(path) => match FileSource::open(path) {
			Ok(mut source) => copy(&mut source, &mut out, chunk),
			Err(err) => {
				error!("could not open {}: {err}", path.display());
				return ExitCode::FAILURE
			}
		},
		None => copy(&mut ReaderSource::from(io::stdin().lock()), &mut out, chunk),
	};

	match result.and_then(|summary| out.flush().map(|_| summary).map_err(Into::into)) {
		Ok(Summary { buffers, bytes, fills }) => {
			info!("copied {bytes}B in {fills} fills through {buffers} buffers");
			ExitCode::SUCCESS
		}
		Err(err) => {
			error!("{err}");
			ExitCode::FAILURE
		}
	}
}

/// Fills buffers from `source` in reads of at most `chunk` bytes, writing each
/// buffer to `sink` once it's full or the source is exhausted.
fn copy(mut source: impl Source, sink: &mut impl Write, chunk: usize) -> iobuf::Result<Summary> {
	let mut summary = Summary::default();
	loop {
		let mut buf = IoBuffer::<{ iobuf::DEFAULT_CAPACITY }>::new();
		let mut eos = false;
		while buf.status() != Status::Full {
			summary.fills += 1;
			if buf.fill(&mut source, chunk)? == 0 {
				eos = true;
				break
			}
		}

		if !buf.is_empty() {
			sink.write_all(buf.as_slice())?;
			summary.buffers += 1;
			summary.bytes += buf.count();
			debug!("wrote buffer {} ({}B, {})", summary.buffers, buf.count(), buf.status());
		}
		buf.destroy();

		if eos {
			return Ok(summary)
		}
	}
}
