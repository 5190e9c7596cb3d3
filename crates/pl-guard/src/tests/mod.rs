mod support;

mod scanner;
