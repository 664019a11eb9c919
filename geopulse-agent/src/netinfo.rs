use std::io;
use std::net::{Ipv4Addr, SocketAddr, UdpSocket};

/// Discovers the local IPv4 address by connecting a UDP socket toward a
/// public address. No packet is sent; the OS only picks a source interface.
pub fn local_ipv4() -> io::Result<Ipv4Addr> {
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))?;
    socket.connect((Ipv4Addr::new(8, 8, 8, 8), 80))?;

    match socket.local_addr()? {
        SocketAddr::V4(addr) => Ok(*addr.ip()),
        SocketAddr::V6(_) => Err(io::Error::new(
            io::ErrorKind::AddrNotAvailable,
            "no IPv4 interface",
        )),
    }
}
