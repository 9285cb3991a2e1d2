// Trial division up to floor(sqrt(n))
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    let sqrt = (n as f64).sqrt() as u32;
    for d in 2..=sqrt {
        if n % d == 0 {
            return false;
        }
    }
    true
}

// Every prime in 2..=limit
pub fn prime_scan(limit: u32) -> Vec<u32> {
    (2..=limit).filter(|&n| is_prime(n)).collect()
}
