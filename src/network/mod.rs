//! Configuration for the handshake networks
//!
//! # Examples
//!
//! Pick the network by name and get its address prefix:
//!
//! ```rust
//! use hns_tx::network::Network;
//!
//! let network = Network::from_name("regtest").unwrap();
//! assert_eq!(network.address_hrp(), "rs");
//! ```

mod network;

pub use self::network::Network;
