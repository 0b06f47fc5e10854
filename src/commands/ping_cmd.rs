use crate::commands::{Command, CommandContext};
use crate::output::OutputLine;

pub struct PingCommand;

const DEFAULT_COUNT: usize = 4;

/// FNV-1a, so a host always pings with the same latencies.
fn host_seed(host: &str) -> u64 {
    host.bytes().fold(0xcbf29ce484222325, |hash, b| (hash ^ u64::from(b)).wrapping_mul(0x100000001b3))
}

fn fake_address(seed: u64) -> String {
    let b = seed.to_be_bytes();
    format!("93.{}.{}.{}", b[1], b[2], b[3])
}

impl Command for PingCommand {
    fn name(&self) -> &'static str {
        "ping"
    }

    fn description(&self) -> &'static str {
        "Send ICMP echo requests (simulated)"
    }

    fn usage(&self) -> &'static str {
        "ping [-c count] host"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        let mut count = DEFAULT_COUNT;
        let mut host: Option<&str> = None;
        let mut i = 0;
        while i < ctx.args.len() {
            match ctx.args[i].as_str() {
                "-c" => {
                    i += 1;
                    match ctx.args.get(i).and_then(|v| v.parse::<usize>().ok()).filter(|n| (1..=20).contains(n)) {
                        Some(n) => count = n,
                        None => return vec![OutputLine::error("ping: invalid count of packets to transmit")],
                    }
                }
                arg => host = Some(arg),
            }
            i += 1;
        }

        let Some(host) = host else {
            return vec![OutputLine::error("ping: usage error: Destination address required")];
        };

        let seed = host_seed(host);
        let address = fake_address(seed);
        let base = 8.0 + (seed % 4000) as f64 / 100.0;

        let mut out = vec![OutputLine::output(format!("PING {} ({}): 56 data bytes", host, address))];
        let mut times = Vec::with_capacity(count);
        for seq in 0..count {
            let jitter = ((seed >> (seq * 5 % 56)) % 300) as f64 / 100.0;
            let time = base + jitter;
            times.push(time);
            out.push(OutputLine::output(format!(
                "64 bytes from {}: icmp_seq={} ttl=56 time={:.3} ms",
                address, seq, time
            )));
        }

        let min = times.iter().copied().fold(f64::INFINITY, f64::min);
        let max = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let avg = times.iter().sum::<f64>() / times.len() as f64;
        out.push(OutputLine::output(""));
        out.push(OutputLine::output(format!("--- {} ping statistics ---", host)));
        out.push(OutputLine::output(format!(
            "{} packets transmitted, {} packets received, 0.0% packet loss",
            count, count
        )));
        out.push(OutputLine::output(format!("round-trip min/avg/max = {:.3}/{:.3}/{:.3} ms", min, avg, max)));
        out
    }
}
