use log::{debug, trace};

use crate::ast::{BinaryOp, Expr, Lexer, Token, UnaryOp};
use crate::error::{ParseError, SyntaxError};

/// Operator-stack entries. `Sentinel` is the precedence floor bounding a
/// sub-expression's reductions; it never appears in the returned tree.
#[derive(Debug)]
enum StackOp {
    Sentinel,
    Unary(UnaryOp),
    Binary(BinaryOp),
    /// Function-call marker. `arity` is the number of argument expressions
    /// parsed between the call's parentheses.
    Call { name: String, arity: usize },
}

impl StackOp {
    fn precedence(&self) -> u8 {
        match self {
            StackOp::Sentinel => 0,
            StackOp::Unary(op) => op.precedence(),
            StackOp::Binary(op) => op.precedence(),
            StackOp::Call { .. } => u8::MAX,
        }
    }
}

/// Recursive-descent parser resolving operator precedence through a pair of
/// explicit stacks (shunting yard).
///
/// Both stacks live inside the parser value and the parser value lives for
/// one `parse_expression` call, so concurrent parses share nothing.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    current: Token<'src>,
    operands: Vec<Expr>,
    operators: Vec<StackOp>,
}

impl<'src> Parser<'src> {
    /// Parse `input` into an expression tree.
    pub fn parse_expression(input: &'src str) -> Result<Expr, ParseError> {
        debug!("parsing expression: {input}");
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        let mut parser = Parser {
            lexer,
            current,
            operands: Vec::new(),
            operators: Vec::new(),
        };

        parser.expression()?;
        match &parser.current {
            Token::End => {}
            Token::RightParen => return Err(SyntaxError::UnmatchedParen.into()),
            token => return Err(SyntaxError::UnexpectedToken(token.to_string()).into()),
        }

        let root = parser
            .operands
            .pop()
            .expect("a fully reduced parse leaves exactly one operand");
        debug!("parsed: {root:?}");
        Ok(root)
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    /// Expr ::= Primary { BinaryOp Primary }
    ///
    /// Pushes a sentinel, folds the operator run, then drains back down to
    /// (and pops) that sentinel, leaving one operand on the stack.
    fn expression(&mut self) -> Result<(), ParseError> {
        self.operators.push(StackOp::Sentinel);
        self.primary()?;

        loop {
            let symbol = match self.current {
                Token::Op(symbol) => symbol,
                _ => break,
            };
            let op = BinaryOp::try_from(symbol)
                .expect("the lexer only emits arithmetic operator symbols");
            self.push_operator(StackOp::Binary(op));
            self.advance()?;
            self.primary()?;
        }

        while !matches!(self.operators.last(), Some(StackOp::Sentinel)) {
            self.reduce();
        }
        self.operators.pop();
        Ok(())
    }

    /// Primary ::= Number | "(" Expr ")" | "-" Primary
    ///           | Identifier [ "(" ArgList ")" ]
    fn primary(&mut self) -> Result<(), ParseError> {
        match &self.current {
            Token::Number(text) => {
                let text = text.to_string();
                self.operands.push(Expr::Number(text));
                self.advance()
            }
            Token::Ident(name) => {
                let name = name.clone();
                self.advance()?;
                if self.current == Token::LeftParen {
                    self.call(name)
                } else {
                    self.operands.push(Expr::Variable(name));
                    Ok(())
                }
            }
            Token::Op('-') => {
                // Prefix operator: its operand is not parsed yet, so it is
                // pushed without reducing anything.
                self.operators.push(StackOp::Unary(UnaryOp::Negate));
                self.advance()?;
                self.primary()
            }
            Token::LeftParen => {
                self.advance()?;
                self.expression()?;
                self.expect_right_paren()
            }
            Token::End => Err(SyntaxError::UnexpectedEnd.into()),
            token => Err(SyntaxError::InvalidPrimary(token.to_string()).into()),
        }
    }

    /// ArgList ::= Expr { "," Expr }
    ///
    /// The call marker goes onto the operator stack before its arguments;
    /// each argument expression leaves one operand above it. The marker's
    /// arity is filled in once the closing parenthesis is consumed, and the
    /// ordinary reduction machinery assembles the `Call` node.
    fn call(&mut self, name: String) -> Result<(), ParseError> {
        trace!("call '{name}'");
        self.advance()?;
        self.operators.push(StackOp::Call { name, arity: 0 });

        self.expression()?;
        let mut arity = 1;
        while self.current == Token::Comma {
            self.advance()?;
            self.expression()?;
            arity += 1;
        }
        self.expect_right_paren()?;

        match self.operators.last_mut() {
            Some(StackOp::Call {
                arity: declared, ..
            }) => *declared = arity,
            _ => unreachable!("argument expressions leave the call marker on top"),
        }
        Ok(())
    }

    fn expect_right_paren(&mut self) -> Result<(), ParseError> {
        match &self.current {
            Token::RightParen => self.advance(),
            Token::End => Err(SyntaxError::UnexpectedEnd.into()),
            token => Err(SyntaxError::UnexpectedToken(token.to_string()).into()),
        }
    }

    /// Push a binary operator, first reducing every stacked operator whose
    /// precedence is not lower than the incoming one. The sentinel's floor
    /// precedence stops the drain at the enclosing group boundary.
    fn push_operator(&mut self, op: StackOp) {
        while self
            .operators
            .last()
            .is_some_and(|top| top.precedence() >= op.precedence())
        {
            self.reduce();
        }
        self.operators.push(op);
    }

    /// Pop one operator and the operands it needs, build the corresponding
    /// node, and push it back as an operand.
    fn reduce(&mut self) {
        match self.operators.pop() {
            Some(StackOp::Binary(op)) => {
                let right = self
                    .operands
                    .pop()
                    .expect("a binary operator has two operands");
                let left = self
                    .operands
                    .pop()
                    .expect("a binary operator has two operands");
                trace!("reduce {op}");
                self.operands.push(Expr::Binary {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                });
            }
            Some(StackOp::Unary(op)) => {
                let operand = self
                    .operands
                    .pop()
                    .expect("a unary operator has one operand");
                self.operands.push(Expr::Unary {
                    op,
                    operand: Box::new(operand),
                });
            }
            Some(StackOp::Call { name, arity }) => {
                // split_off keeps push order, which is left-to-right source
                // order for the arguments.
                let args = self.operands.split_off(self.operands.len() - arity);
                trace!("reduce call '{name}'/{arity}");
                self.operands.push(Expr::Call { name, args });
            }
            Some(StackOp::Sentinel) | None => unreachable!("reduction stops at the sentinel"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexError;

    fn num(text: &str) -> Expr {
        Expr::Number(text.to_string())
    }

    fn var(name: &str) -> Expr {
        Expr::Variable(name.to_string())
    }

    fn binary(left: Expr, op: BinaryOp, right: Expr) -> Expr {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    #[test]
    fn test_parses_number_literal() {
        let ast = Parser::parse_expression("3.14").unwrap();
        assert_eq!(ast, num("3.14"));
    }

    #[test]
    fn test_parses_variable_lowercased() {
        let ast = Parser::parse_expression("Price").unwrap();
        assert_eq!(ast, var("price"));
    }

    #[test]
    fn test_multiplication_binds_tighter_than_addition() {
        let ast = Parser::parse_expression("1+2*3").unwrap();
        let expected = binary(num("1"), BinaryOp::Add, binary(num("2"), BinaryOp::Multiply, num("3")));
        assert_eq!(ast, expected);
    }

    #[test]
    fn test_division_binds_tighter_than_multiplication() {
        let ast = Parser::parse_expression("a*b/c").unwrap();
        let expected = binary(var("a"), BinaryOp::Multiply, binary(var("b"), BinaryOp::Divide, var("c")));
        assert_eq!(ast, expected);
    }

    #[test]
    fn test_division_chain_stays_left_to_right() {
        let ast = Parser::parse_expression("a/b*c").unwrap();
        let expected = binary(binary(var("a"), BinaryOp::Divide, var("b")), BinaryOp::Multiply, var("c"));
        assert_eq!(ast, expected);
    }

    #[test]
    fn test_power_is_left_associative() {
        let ast = Parser::parse_expression("2^3^2").unwrap();
        let expected = binary(binary(num("2"), BinaryOp::Power, num("3")), BinaryOp::Power, num("2"));
        assert_eq!(ast, expected);
    }

    #[test]
    fn test_unary_negation_binds_tighter_than_power() {
        let ast = Parser::parse_expression("-2^2").unwrap();
        let expected = binary(
            Expr::Unary {
                op: UnaryOp::Negate,
                operand: Box::new(num("2")),
            },
            BinaryOp::Power,
            num("2"),
        );
        assert_eq!(ast, expected);
    }

    #[test]
    fn test_double_negation() {
        let ast = Parser::parse_expression("--2").unwrap();
        let expected = Expr::Unary {
            op: UnaryOp::Negate,
            operand: Box::new(Expr::Unary {
                op: UnaryOp::Negate,
                operand: Box::new(num("2")),
            }),
        };
        assert_eq!(ast, expected);
    }

    #[test]
    fn test_parentheses_override_precedence() {
        let ast = Parser::parse_expression("2*(1+3)").unwrap();
        let expected = binary(num("2"), BinaryOp::Multiply, binary(num("1"), BinaryOp::Add, num("3")));
        assert_eq!(ast, expected);
    }

    #[test]
    fn test_call_with_single_argument() {
        let ast = Parser::parse_expression("sin(1)").unwrap();
        let expected = Expr::Call {
            name: "sin".to_string(),
            args: vec![num("1")],
        };
        assert_eq!(ast, expected);
    }

    #[test]
    fn test_call_arguments_keep_source_order() {
        let ast = Parser::parse_expression("f(1, x, 2+3)").unwrap();
        let expected = Expr::Call {
            name: "f".to_string(),
            args: vec![num("1"), var("x"), binary(num("2"), BinaryOp::Add, num("3"))],
        };
        assert_eq!(ast, expected);
    }

    #[test]
    fn test_nested_calls() {
        let ast = Parser::parse_expression("max(1, min(2, 3))").unwrap();
        let expected = Expr::Call {
            name: "max".to_string(),
            args: vec![
                num("1"),
                Expr::Call {
                    name: "min".to_string(),
                    args: vec![num("2"), num("3")],
                },
            ],
        };
        assert_eq!(ast, expected);
    }

    #[test]
    fn test_call_name_folds_to_lowercase() {
        let ast = Parser::parse_expression("SIN(X)").unwrap();
        let expected = Expr::Call {
            name: "sin".to_string(),
            args: vec![var("x")],
        };
        assert_eq!(ast, expected);
    }

    #[test]
    fn test_call_followed_by_operator() {
        let ast = Parser::parse_expression("1+pow(2,3)*4").unwrap();
        let expected = binary(
            num("1"),
            BinaryOp::Add,
            binary(
                Expr::Call {
                    name: "pow".to_string(),
                    args: vec![num("2"), num("3")],
                },
                BinaryOp::Multiply,
                num("4"),
            ),
        );
        assert_eq!(ast, expected);
    }

    #[test]
    fn test_unmatched_closing_paren() {
        assert_eq!(
            Parser::parse_expression("(1+2))"),
            Err(ParseError::Syntax(SyntaxError::UnmatchedParen))
        );
    }

    #[test]
    fn test_unclosed_paren_reports_end_of_input() {
        assert_eq!(
            Parser::parse_expression("((1+2)"),
            Err(ParseError::Syntax(SyntaxError::UnexpectedEnd))
        );
    }

    #[test]
    fn test_trailing_operator_reports_end_of_input() {
        assert_eq!(
            Parser::parse_expression("1+"),
            Err(ParseError::Syntax(SyntaxError::UnexpectedEnd))
        );
    }

    #[test]
    fn test_operator_cannot_start_expression() {
        assert_eq!(
            Parser::parse_expression("*5"),
            Err(ParseError::Syntax(SyntaxError::InvalidPrimary("*".to_string())))
        );
    }

    #[test]
    fn test_adjacent_operands_are_rejected() {
        assert_eq!(
            Parser::parse_expression("1 2"),
            Err(ParseError::Syntax(SyntaxError::UnexpectedToken("2".to_string())))
        );
    }

    #[test]
    fn test_empty_argument_list_is_rejected() {
        assert_eq!(
            Parser::parse_expression("f()"),
            Err(ParseError::Syntax(SyntaxError::InvalidPrimary(")".to_string())))
        );
    }

    #[test]
    fn test_lex_failures_surface_through_parse() {
        assert_eq!(
            Parser::parse_expression("1.2.3"),
            Err(ParseError::Lex(LexError::InvalidNumber("1.2.3".to_string())))
        );
        assert_eq!(
            Parser::parse_expression("1 $ 2"),
            Err(ParseError::Lex(LexError::InvalidCharacter('$')))
        );
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(
            Parser::parse_expression(""),
            Err(ParseError::Syntax(SyntaxError::UnexpectedEnd))
        );
    }
}
