pub static TEST_CPF: &str = "12345678901";
pub static TEST_NAME: &str = "Maria da Silva";
pub static TEST_PHONE: &str = "(11) 91234-5678";
pub static TEST_EMAIL: &str = "maria@example.com";
pub static TEST_REGISTRATION: &str = "PR-XMA";
