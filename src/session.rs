//! Interactive prompt loops.
//!
//! A [`Session`] asks for a network once, then checks addresses against it
//! until an empty line (or end of input) is read.

use crate::models::Ipv4;
use crate::output::{write_colored, Tone};
use crate::subnet::is_same_subnet;
use crate::validate::{parse_ip, split_cidr, validate_cidr, validate_ip};
use colored::Colorize;
use std::error::Error;
use std::io::{BufRead, Write};

pub const WELCOME: &str = "Welcome to the IP address and subnet validation program!";
pub const NETWORK_PROMPT: &str =
    "Enter a network (e.g. 192.168.15.0/24) or an empty line to exit: ";
pub const INVALID_NETWORK: &str = "Invalid format! Use the format: xxx.xxx.xxx.xxx/xx";
pub const ADDRESS_HINT: &str = "Enter IP addresses to check, or an empty line to exit.";
pub const ADDRESS_PROMPT: &str = "Enter an IP address: ";
pub const INVALID_ADDRESS: &str = "Invalid IP address. Try again.";
pub const EXITING: &str = "Exiting program...";

pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Session { input, output }
    }

    /// Give back the output stream, e.g. to inspect a test buffer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask for the network, then check addresses against it.
    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        if let Some(network) = self.get_valid_network()? {
            self.process_ip_addresses(&network)?;
        }
        Ok(())
    }

    /// Prompt until a valid CIDR is entered. `None` on an empty line or EOF.
    pub fn get_valid_network(&mut self) -> Result<Option<Ipv4>, Box<dyn Error>> {
        writeln!(self.output, "{WELCOME}")?;
        loop {
            let input = match self.prompt(NETWORK_PROMPT)? {
                Some(input) => input,
                None => {
                    write_colored(&mut self.output, EXITING, Tone::Info)?;
                    return Ok(None);
                }
            };
            if !validate_cidr(&input) {
                log::info!("Rejected network input {:?}", input);
                write_colored(&mut self.output, INVALID_NETWORK, Tone::Error)?;
                continue;
            }
            let (base_ip, prefix_len) = split_cidr(&input)?;
            let network = Ipv4 {
                addr: parse_ip(&base_ip)?,
                mask: prefix_len,
            };
            log::info!("Checking addresses against {}", network.to_string().on_blue());
            let summary = format!(
                "Network {} netmask {} broadcast {}",
                network.network()?,
                network.netmask()?,
                network.broadcast()?
            );
            write_colored(&mut self.output, &summary, Tone::Info)?;
            return Ok(Some(network));
        }
    }

    /// Prompt for addresses and report membership in `network` until an empty line or EOF.
    pub fn process_ip_addresses(&mut self, network: &Ipv4) -> Result<(), Box<dyn Error>> {
        writeln!(self.output, "{ADDRESS_HINT}")?;
        let base_ip = network.addr.to_string();
        loop {
            writeln!(self.output)?;
            let ip = match self.prompt(ADDRESS_PROMPT)? {
                Some(ip) => ip,
                None => {
                    write_colored(&mut self.output, EXITING, Tone::Info)?;
                    return Ok(());
                }
            };
            if !validate_ip(&ip) {
                log::info!("Rejected address input {:?}", ip);
                write_colored(&mut self.output, INVALID_ADDRESS, Tone::Error)?;
                continue;
            }
            let same = is_same_subnet(&ip, &base_ip, network.mask);
            log::debug!("{ip} in {network}: {same}");
            let (verdict, tone) = if same {
                ("IS", Tone::Success)
            } else {
                ("IS NOT", Tone::Failure)
            };
            let line = format!("IP address {ip} {verdict} in the same subnet.");
            write_colored(&mut self.output, &line, tone)?;
        }
    }

    /// Print `text` and read one line without its terminator.
    ///
    /// Returns `None` for an empty line or end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, Box<dyn Error>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.strip_suffix('\n').unwrap_or(&line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            Ok(None)
        } else {
            Ok(Some(line.to_string()))
        }
    }
}
