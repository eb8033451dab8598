//! Expression productions
//!
//! Binary operators are parsed by precedence climbing over operands. An
//! operand is a unary expression with its postfix chain, optionally
//! followed by a `? :` continuation, so a conditional binds to the nearest
//! operand: `a && b ? c : d` is `a && (b ? c : d)`.

use super::error::ParseResult;
use super::gates::{self, Decision, ParenAlternative};
use super::lexer::Token;
use super::parser::Parser;
use super::speculate::Alternative;
use super::types::primitive_kind;
use crate::cst::{
    BinaryOperator, Block, Continuation, Expression, ExpressionList, FormalParameter, FormalParameters, IdentifierList,
    LambdaBody, LambdaIdentifiers, LambdaParameters, MethodInvocation, PostfixOperator, PrefixOperator, TypeType,
    INSTANCEOF_PRECEDENCE,
};

fn single_token_operator(token: Token) -> Option<BinaryOperator> {
    let operator = match token {
        Token::Assign => BinaryOperator::Assign,
        Token::AddAssign => BinaryOperator::AddAssign,
        Token::SubAssign => BinaryOperator::SubAssign,
        Token::MulAssign => BinaryOperator::MulAssign,
        Token::DivAssign => BinaryOperator::DivAssign,
        Token::ModAssign => BinaryOperator::ModAssign,
        Token::AndAssign => BinaryOperator::AndAssign,
        Token::OrAssign => BinaryOperator::OrAssign,
        Token::XorAssign => BinaryOperator::XorAssign,
        Token::LShiftAssign => BinaryOperator::LShiftAssign,
        Token::RShiftAssign => BinaryOperator::RShiftAssign,
        Token::URShiftAssign => BinaryOperator::URShiftAssign,
        Token::PipePipe => BinaryOperator::Or,
        Token::AndAnd => BinaryOperator::And,
        Token::Pipe => BinaryOperator::BitOr,
        Token::Caret => BinaryOperator::BitXor,
        Token::Amp => BinaryOperator::BitAnd,
        Token::Eq => BinaryOperator::Eq,
        Token::Ne => BinaryOperator::Ne,
        Token::Lt => BinaryOperator::Lt,
        Token::Gt => BinaryOperator::Gt,
        Token::Le => BinaryOperator::Le,
        Token::Ge => BinaryOperator::Ge,
        Token::LShift => BinaryOperator::LShift,
        Token::Plus => BinaryOperator::Add,
        Token::Minus => BinaryOperator::Sub,
        Token::Star => BinaryOperator::Mul,
        Token::Slash => BinaryOperator::Div,
        Token::Percent => BinaryOperator::Mod,
        _ => return None,
    };
    Some(operator)
}

fn prefix_operator(token: Token) -> Option<PrefixOperator> {
    match token {
        Token::Plus => Some(PrefixOperator::Plus),
        Token::Minus => Some(PrefixOperator::Minus),
        Token::Inc => Some(PrefixOperator::Increment),
        Token::Dec => Some(PrefixOperator::Decrement),
        Token::Bang => Some(PrefixOperator::Not),
        Token::Tilde => Some(PrefixOperator::Complement),
        _ => None,
    }
}

/// Drop parentheses around a left operand that would bind the same way without them
fn flatten_redundant_parens(left: Expression, outer: BinaryOperator) -> Expression {
    if outer.is_right_associative() {
        return left;
    }
    match left {
        Expression::ParExpression { expression } => match *expression {
            Expression::OperatorExpression { left, operator, right } if operator.precedence() >= outer.precedence() => {
                Expression::OperatorExpression { left, operator, right }
            }
            inner => Expression::par(inner),
        },
        other => other,
    }
}

impl Parser {
    pub fn expression(&mut self) -> ParseResult<Expression> {
        let left = self.operand()?;
        self.operator_tail(left, 0)
    }

    pub(crate) fn expression_list(&mut self) -> ParseResult<ExpressionList> {
        let mut list = vec![self.expression()?];
        while self.match_token(Token::Comma) {
            list.push(self.expression()?);
        }
        Ok(ExpressionList { list })
    }

    /// Entry for a construct opening with `(`, together with whatever
    /// postfix, conditional and operator continuations follow it
    pub fn par_cast_or_lambda_expression(&mut self) -> ParseResult<Expression> {
        if !self.check(Token::LParen) {
            return self.unexpected(&[Token::LParen.describe()]);
        }
        let head = self.nested(|p| {
            let primary = p.parenthesized_primary()?;
            p.postfix_tail(primary)
        })?;
        let operand = self.ternary_tail(head)?;
        self.operator_tail(operand, 0)
    }

    fn operand(&mut self) -> ParseResult<Expression> {
        let operand = self.unary()?;
        self.ternary_tail(operand)
    }

    fn ternary_tail(&mut self, condition: Expression) -> ParseResult<Expression> {
        if !self.match_token(Token::Question) {
            return Ok(condition);
        }
        self.nested(|p| {
            let then = p.expression()?;
            p.expect(Token::Colon)?;
            let otherwise = p.expression()?;
            Ok(Expression::if_else(condition, then, otherwise))
        })
    }

    /// Binary operator at the cursor and how many tokens spell it.
    ///
    /// `>>` and `>>>` arrive as adjacent `>` tokens.
    fn peek_binary_operator(&self) -> Option<(BinaryOperator, usize)> {
        let first = self.stream.peek(0)?;
        if first.token != Token::Gt {
            return single_token_operator(first.token).map(|op| (op, 1));
        }

        let mut width = 1;
        let mut end = first.end_offset();
        while width < 3 {
            match self.stream.peek(width) {
                Some(next) if next.token == Token::Gt && next.location.offset == end => {
                    end = next.end_offset();
                    width += 1;
                }
                _ => break,
            }
        }
        let operator = match width {
            1 => BinaryOperator::Gt,
            2 => BinaryOperator::RShift,
            _ => BinaryOperator::URShift,
        };
        Some((operator, width))
    }

    /// Fold binary operators of at least `min_precedence` onto `left`.
    ///
    /// Every folded operator deepens the tree, so it counts against the
    /// nesting limit until the chain is complete.
    fn operator_tail(&mut self, left: Expression, min_precedence: u8) -> ParseResult<Expression> {
        let depth = self.depth;
        let result = self.operator_chain(left, min_precedence);
        self.depth = depth;
        result
    }

    fn operator_chain(&mut self, mut left: Expression, min_precedence: u8) -> ParseResult<Expression> {
        loop {
            if self.check(Token::InstanceOf) {
                if INSTANCEOF_PRECEDENCE < min_precedence {
                    break;
                }
                self.deepen()?;
                self.stream.bump();
                let type_type = self.type_type()?;
                let test = Expression::InstanceofExpression {
                    expression: Box::new(left),
                    type_type,
                };
                left = self.ternary_tail(test)?;
                continue;
            }

            let Some((operator, width)) = self.peek_binary_operator() else {
                break;
            };
            let precedence = operator.precedence();
            if precedence < min_precedence {
                break;
            }
            self.deepen()?;
            for _ in 0..width {
                self.stream.bump();
            }

            let next_min = if operator.is_right_associative() {
                precedence
            } else {
                precedence + 1
            };
            let right = self.nested(|p| {
                let first = p.operand()?;
                p.operator_tail(first, next_min)
            })?;
            left = Expression::operator(flatten_redundant_parens(left, operator), operator, right);
        }
        Ok(left)
    }

    pub(crate) fn unary(&mut self) -> ParseResult<Expression> {
        self.nested(|p| match p.stream.peek_token(0).and_then(prefix_operator) {
            Some(prefix) => {
                p.stream.bump();
                let expression = p.unary()?;
                Ok(Expression::PrefixExpression {
                    prefix,
                    expression: Box::new(expression),
                })
            }
            None => {
                let primary = p.primary()?;
                p.postfix_tail(primary)
            }
        })
    }

    /// Greedily attach `.name`, `.call()`, `[index]` and friends
    fn postfix_tail(&mut self, expression: Expression) -> ParseResult<Expression> {
        if !expression.accepts_continuation() {
            return Ok(expression);
        }
        let depth = self.depth;
        let result = self.postfix_chain(expression);
        self.depth = depth;
        result
    }

    fn postfix_chain(&mut self, mut expression: Expression) -> ParseResult<Expression> {
        loop {
            if matches!(self.stream.peek_token(0), Some(Token::Dot) | Some(Token::LBracket)) {
                self.deepen()?;
            }
            let rest = match self.stream.peek_token(0) {
                Some(Token::Dot) => {
                    self.stream.bump();
                    self.member_continuation()?
                }
                Some(Token::LBracket) => {
                    self.stream.bump();
                    let index = self.expression()?;
                    self.expect(Token::RBracket)?;
                    Continuation::Dimension { expression: Box::new(index) }
                }
                Some(Token::Inc) | Some(Token::Dec) => {
                    let postfix = if self.match_token(Token::Inc) {
                        PostfixOperator::Increment
                    } else {
                        self.stream.bump();
                        PostfixOperator::Decrement
                    };
                    return Ok(Expression::PostfixExpression {
                        expression: Box::new(expression),
                        postfix,
                    });
                }
                _ => return Ok(expression),
            };
            expression = Expression::qualified(expression, rest);
        }
    }

    fn member_continuation(&mut self) -> ParseResult<Continuation> {
        match self.stream.peek_token(0) {
            Some(Token::Identifier) if self.check_at(1, Token::LParen) => {
                Ok(Continuation::MethodInvocation(self.method_invocation()?))
            }
            Some(Token::Identifier) => {
                let name = self.expect_identifier()?;
                Ok(Continuation::Identifier { value: name.value })
            }
            Some(Token::This) => {
                self.stream.bump();
                Ok(Continuation::This)
            }
            Some(Token::Super) => {
                self.stream.bump();
                Ok(Continuation::Super)
            }
            Some(Token::Class) => {
                self.stream.bump();
                Ok(Continuation::Class)
            }
            _ => self.unexpected(&["identifier", "'this'", "'super'", "'class'"]),
        }
    }

    /// `name(args)` followed by any `[index]` accesses
    fn method_invocation(&mut self) -> ParseResult<MethodInvocation> {
        let name = self.expect_identifier()?;
        self.expect(Token::LParen)?;
        let parameters = if self.check(Token::RParen) {
            None
        } else {
            Some(self.expression_list()?)
        };
        self.expect(Token::RParen)?;

        let mut dimensions = Vec::new();
        while self.match_token(Token::LBracket) {
            dimensions.push(self.expression()?);
            self.expect(Token::RBracket)?;
        }
        Ok(MethodInvocation { name, parameters, dimensions })
    }

    fn primary(&mut self) -> ParseResult<Expression> {
        let Some(token) = self.stream.peek(0) else {
            return self.unexpected(&["expression"]);
        };
        let value = token.lexeme.clone();

        let literal = match token.token {
            Token::LParen => return self.parenthesized_primary(),
            Token::New => return self.creator(),
            Token::Identifier if self.check_at(1, Token::Arrow) => return self.bare_lambda_expression(),
            Token::Identifier if self.check_at(1, Token::LParen) => {
                return Ok(Expression::MethodInvocation(self.method_invocation()?))
            }
            Token::Identifier => Expression::Identifier { value },
            Token::This => Expression::This,
            Token::Super => Expression::Super,
            Token::Null => Expression::NullLiteral,
            Token::True | Token::False => Expression::BooleanLiteral { value },
            Token::DecimalInteger => Expression::DecimalLiteral { value },
            Token::HexInteger => Expression::HexLiteral { value },
            Token::OctalInteger => Expression::OctLiteral { value },
            Token::BinaryInteger => Expression::BinaryLiteral { value },
            Token::FloatingPoint => Expression::FloatLiteral { value },
            Token::CharLiteral => Expression::CharLiteral { value },
            Token::StringLiteral => Expression::StringLiteral { value },
            _ => return self.unexpected(&["expression"]),
        };
        self.stream.bump();
        Ok(literal)
    }

    /// Parenthesized, cast or lambda expression, without continuations
    fn parenthesized_primary(&mut self) -> ParseResult<Expression> {
        match gates::classify_paren(&self.stream, self.config.max_lookahead) {
            Decision::Decided(ParenAlternative::Lambda) => self.lambda_expression(),
            Decision::Decided(ParenAlternative::Cast) => self.cast_expression(),
            Decision::Decided(ParenAlternative::Parenthesized) => self.par_expression(),
            Decision::Decided(ParenAlternative::CastOrParenthesized) => {
                let alternatives: [Alternative<Expression>; 2] = [
                    ("cast expression", Parser::cast_expression),
                    ("parenthesized expression", Parser::par_expression),
                ];
                self.first_of("cast or parenthesized expression", &alternatives)
            }
            Decision::Undecidable => {
                let alternatives: [Alternative<Expression>; 3] = [
                    ("lambda expression", Parser::lambda_expression),
                    ("cast expression", Parser::cast_expression),
                    ("parenthesized expression", Parser::par_expression),
                ];
                self.first_of("parenthesized, cast or lambda expression", &alternatives)
            }
        }
    }

    fn par_expression(&mut self) -> ParseResult<Expression> {
        self.expect(Token::LParen)?;
        let expression = self.expression()?;
        self.expect(Token::RParen)?;
        Ok(Expression::par(expression))
    }

    fn cast_expression(&mut self) -> ParseResult<Expression> {
        self.expect(Token::LParen)?;
        let cast_type = self.type_type()?;
        self.expect(Token::RParen)?;
        // A reference type cannot cast a signed or stepped operand: `(a) - b` is a subtraction
        if !cast_type.is_primitive() {
            if let Some(Token::Plus | Token::Minus | Token::Inc | Token::Dec) = self.stream.peek_token(0) {
                return self.unexpected(&["cast operand"]);
            }
        }
        let expression = self.unary()?;
        Ok(Expression::CastExpression {
            cast_type,
            expression: Box::new(expression),
        })
    }

    fn lambda_expression(&mut self) -> ParseResult<Expression> {
        let parameters = if gates::lambda_parameters_are_bare(&self.stream) {
            LambdaParameters::Identifiers(self.lambda_identifiers()?)
        } else {
            LambdaParameters::Formal(self.formal_parameters()?)
        };
        self.expect(Token::Arrow)?;
        let body = self.lambda_body()?;
        Ok(Expression::LambdaExpression { parameters, body })
    }

    /// `x -> body`
    fn bare_lambda_expression(&mut self) -> ParseResult<Expression> {
        let name = self.expect_identifier()?;
        self.expect(Token::Arrow)?;
        let body = self.lambda_body()?;
        Ok(Expression::LambdaExpression {
            parameters: LambdaParameters::Identifiers(LambdaIdentifiers {
                identifiers: Some(IdentifierList { list: vec![name] }),
            }),
            body,
        })
    }

    fn lambda_identifiers(&mut self) -> ParseResult<LambdaIdentifiers> {
        self.expect(Token::LParen)?;
        if self.match_token(Token::RParen) {
            return Ok(LambdaIdentifiers { identifiers: None });
        }
        let mut list = vec![self.expect_identifier()?];
        while self.match_token(Token::Comma) {
            list.push(self.expect_identifier()?);
        }
        self.expect(Token::RParen)?;
        Ok(LambdaIdentifiers {
            identifiers: Some(IdentifierList { list }),
        })
    }

    fn formal_parameters(&mut self) -> ParseResult<FormalParameters> {
        self.expect(Token::LParen)?;
        let mut parameters = vec![self.formal_parameter()?];
        while self.match_token(Token::Comma) {
            parameters.push(self.formal_parameter()?);
        }
        self.expect(Token::RParen)?;
        Ok(FormalParameters { parameters })
    }

    fn formal_parameter(&mut self) -> ParseResult<FormalParameter> {
        let modifiers = self.modifiers()?;
        let type_type = self.type_type()?;
        let dot_dot_dot = self.match_token(Token::Ellipsis);
        let id = self.variable_declarator_id()?;
        Ok(FormalParameter {
            modifiers,
            type_type,
            dot_dot_dot,
            id,
        })
    }

    fn lambda_body(&mut self) -> ParseResult<LambdaBody> {
        if self.check(Token::LBrace) {
            let block: Block = self.block()?;
            Ok(LambdaBody::Block(block))
        } else {
            Ok(LambdaBody::Expression(Box::new(self.expression()?)))
        }
    }

    /// `new` instance or array creation
    fn creator(&mut self) -> ParseResult<Expression> {
        self.expect(Token::New)?;

        let primitive = self.stream.peek_token(0).and_then(primitive_kind);
        let type_type = match primitive {
            Some(kind) => {
                self.stream.bump();
                TypeType::primitive(kind)
            }
            None if self.check(Token::Identifier) => self.class_type(true)?,
            None => return self.unexpected(&["type"]),
        };

        if self.check(Token::LBracket) {
            return self.array_creation(type_type);
        }
        if primitive.is_some() {
            return self.unexpected(&[Token::LBracket.describe()]);
        }

        self.expect(Token::LParen)?;
        let arguments = if self.check(Token::RParen) {
            None
        } else {
            Some(self.expression_list()?)
        };
        self.expect(Token::RParen)?;
        Ok(Expression::InstanceCreation { type_type, arguments })
    }

    fn array_creation(&mut self, type_type: TypeType) -> ParseResult<Expression> {
        let mut dimensions = Vec::new();
        let mut extra_dimensions = 0;
        while self.check(Token::LBracket) {
            if self.check_at(1, Token::RBracket) {
                self.stream.bump();
                self.stream.bump();
                extra_dimensions += 1;
            } else if extra_dimensions == 0 {
                self.stream.bump();
                dimensions.push(self.expression()?);
                self.expect(Token::RBracket)?;
            } else {
                break;
            }
        }

        let initializer = if dimensions.is_empty() {
            Some(self.array_initializer()?)
        } else {
            None
        };
        Ok(Expression::ArrayCreation {
            type_type,
            dimensions,
            extra_dimensions,
            initializer,
        })
    }
}
