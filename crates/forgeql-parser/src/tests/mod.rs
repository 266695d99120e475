mod lexer_tests;
mod utils;
