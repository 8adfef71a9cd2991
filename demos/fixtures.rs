use ark_ledger_apdu::{Bip32Path, Config, RequestKind};

fn main() {
    let requests = [
        Config::new(RequestKind::PublicKey),
        Config::new(RequestKind::ExtendedPublicKey),
        Config {
            payload: Some(b"Hi, this is my wallet".to_vec()),
            ..Config::new(RequestKind::Message)
        },
        Config {
            path: Bip32Path::bip44(111, 0, 0, 0),
            payload: Some(vec![0xFF; 600]),
            ..Config::new(RequestKind::Transaction)
        },
    ];

    for config in &requests {
        match config.frames() {
            Ok(frames) => {
                println!("[{:?} {}]", config.kind, config.path);
                for (i, frame) in frames.iter().enumerate() {
                    println!("  {}/{}: {frame}", i + 1, frames.len());
                }
            }
            Err(e) => eprintln!("  error: {e}"),
        }
    }
}
