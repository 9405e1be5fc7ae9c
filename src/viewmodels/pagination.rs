// Paginación sin total: "siguiente" se habilita mientras llegue una página llena

pub fn previous_page(page: u32) -> u32 {
    page.saturating_sub(1).max(1)
}

pub fn next_page(page: u32) -> u32 {
    page.max(1).saturating_add(1)
}

pub fn can_go_previous(page: u32) -> bool {
    page > 1
}

pub fn can_go_next(received: usize, page_size: u32) -> bool {
    received > 0 && received >= page_size as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_previous_never_below_one() {
        assert_eq!(previous_page(3), 2);
        assert_eq!(previous_page(1), 1);
        assert_eq!(previous_page(0), 1);
        assert!(!can_go_previous(1));
        assert!(can_go_previous(2));
    }

    #[test]
    fn test_next_requires_full_page() {
        assert_eq!(next_page(1), 2);
        assert!(can_go_next(20, 20));
        assert!(!can_go_next(19, 20));
        assert!(!can_go_next(0, 20));
    }
}
