/// Short form of a chain address for the header pill: `0xaa48...9bfb`.
pub fn short_address(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortens_long_addresses() {
        let addr = "0xaa482b655edc850567b18bc546272ac13bb6aee4fb548bdb4d663b67d19a9bfb";
        assert_eq!(short_address(addr), "0xaa48...9bfb");
    }

    #[test]
    fn leaves_short_values_alone() {
        assert_eq!(short_address("0x1234"), "0x1234");
        assert_eq!(short_address(""), "");
    }
}
