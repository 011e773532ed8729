//! Interactive client for the seat reservation server.

use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

use seat_reservation::client::{normalize_command, render_seat_map};

#[derive(Parser)]
#[command(name = "seat-client")]
#[command(about = "Interactive client for the seat reservation server", long_about = None)]
struct Cli {
    /// Server host.
    #[arg(default_value = "127.0.0.1")]
    host: String,

    /// Server port.
    #[arg(default_value_t = 8080)]
    port: u16,

    /// Seats in the server's table, used to draw the map.
    #[arg(long, default_value_t = 20)]
    seats: u32,
}

const HELP: &str = "Commands:
  available | avail | a      show the seat map
  book n s1 ... sn | b ...   book n seats
  cancel n s1 ... sn | c ... cancel n of your seats
  exit | quit | q            disconnect";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let stream = TcpStream::connect((cli.host.as_str(), cli.port)).await?;
    println!("Connected to {}:{}", cli.host, cli.port);
    println!("{HELP}\n");

    let (reader, mut writer) = stream.into_split();
    let mut replies = BufReader::new(reader).lines();
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::Write::flush(&mut std::io::stdout())?;

        let Some(line) = input.next_line().await? else {
            break;
        };
        let Some(command) = normalize_command(&line) else {
            continue;
        };

        writer.write_all(command.as_bytes()).await?;
        writer.write_all(b"\n").await?;

        if command == "EXIT" {
            println!("Goodbye!");
            break;
        }

        let Some(reply) = replies.next_line().await? else {
            eprintln!("Server closed the connection");
            break;
        };

        match render_seat_map(&reply, cli.seats) {
            Some(map) => println!("{map}"),
            None => println!("{reply}"),
        }
    }

    Ok(())
}
