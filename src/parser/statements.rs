//! Blocks, statements and `for` headers

use super::error::ParseResult;
use super::gates::{self, Decision, ForControlAlternative};
use super::lexer::Token;
use super::parser::Parser;
use super::speculate::Alternative;
use crate::cst::{
    BasicForStatement, Block, BreakStatement, ContinueStatement, DoStatement, EmptyStatement,
    EnhancedForStatement, ExpressionStatement, ForControl, ForInit, ForStatement, IfStatement,
    LocalVariableDeclaration, LocalVariableDeclarationStatement, ReturnStatement, Statement, ThrowStatement,
    VariableDeclarator, VariableDeclarators, WhileStatement,
};

impl Parser {
    pub fn block(&mut self) -> ParseResult<Block> {
        self.expect(Token::LBrace)?;
        let mut statements = Vec::new();
        while !self.check(Token::RBrace) {
            if self.is_at_end() {
                return self.unexpected(&[Token::RBrace.describe()]);
            }
            statements.push(self.statement()?);
        }
        self.expect(Token::RBrace)?;
        Ok(Block { statements })
    }

    pub fn statement(&mut self) -> ParseResult<Statement> {
        self.nested(|p| match p.stream.peek_token(0) {
            Some(Token::LBrace) => Ok(Statement::Block(p.block()?)),
            Some(Token::Semicolon) => {
                p.stream.bump();
                Ok(Statement::Empty(EmptyStatement {}))
            }
            Some(Token::If) => p.if_statement(),
            Some(Token::While) => {
                p.stream.bump();
                let condition = p.condition()?;
                let body = Box::new(p.statement()?);
                Ok(Statement::While(WhileStatement { condition, body }))
            }
            Some(Token::Do) => {
                p.stream.bump();
                let body = Box::new(p.statement()?);
                p.expect(Token::While)?;
                let condition = p.condition()?;
                p.expect(Token::Semicolon)?;
                Ok(Statement::Do(DoStatement { body, condition }))
            }
            Some(Token::For) => {
                p.stream.bump();
                p.expect(Token::LParen)?;
                let control = p.for_control()?;
                p.expect(Token::RParen)?;
                let body = Box::new(p.statement()?);
                Ok(Statement::For(ForStatement { control, body }))
            }
            Some(Token::Return) => {
                p.stream.bump();
                let expression = if p.check(Token::Semicolon) {
                    None
                } else {
                    Some(p.expression()?)
                };
                p.expect(Token::Semicolon)?;
                Ok(Statement::Return(ReturnStatement { expression }))
            }
            Some(Token::Break) => {
                p.stream.bump();
                let label = p.label()?;
                Ok(Statement::Break(BreakStatement { label }))
            }
            Some(Token::Continue) => {
                p.stream.bump();
                let label = p.label()?;
                Ok(Statement::Continue(ContinueStatement { label }))
            }
            Some(Token::Throw) => {
                p.stream.bump();
                let expression = p.expression()?;
                p.expect(Token::Semicolon)?;
                Ok(Statement::Throw(ThrowStatement { expression }))
            }
            _ => p.declaration_or_expression_statement(),
        })
    }

    fn if_statement(&mut self) -> ParseResult<Statement> {
        self.expect(Token::If)?;
        let condition = self.condition()?;
        let body = Box::new(self.statement()?);
        let otherwise = if self.match_token(Token::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };
        Ok(Statement::If(IfStatement { condition, body, otherwise }))
    }

    /// `( expression )` after `if`, `while`
    fn condition(&mut self) -> ParseResult<crate::cst::Expression> {
        self.expect(Token::LParen)?;
        let condition = self.expression()?;
        self.expect(Token::RParen)?;
        Ok(condition)
    }

    /// Optional label, then `;`
    fn label(&mut self) -> ParseResult<Option<crate::cst::Identifier>> {
        let label = if self.check(Token::Identifier) {
            Some(self.expect_identifier()?)
        } else {
            None
        };
        self.expect(Token::Semicolon)?;
        Ok(label)
    }

    fn declaration_or_expression_statement(&mut self) -> ParseResult<Statement> {
        match gates::starts_local_variable_declaration(&self.stream, self.config.max_lookahead) {
            Decision::Decided(true) => self.local_variable_declaration_statement(),
            Decision::Decided(false) => self.expression_statement(),
            Decision::Undecidable => {
                let alternatives: [Alternative<Statement>; 2] = [
                    ("local variable declaration", Parser::local_variable_declaration_statement),
                    ("expression statement", Parser::expression_statement),
                ];
                self.first_of("statement", &alternatives)
            }
        }
    }

    fn local_variable_declaration_statement(&mut self) -> ParseResult<Statement> {
        let declaration = self.local_variable_declaration()?;
        self.expect(Token::Semicolon)?;
        Ok(Statement::LocalVariableDeclaration(LocalVariableDeclarationStatement { declaration }))
    }

    fn expression_statement(&mut self) -> ParseResult<Statement> {
        let expression = self.expression()?;
        self.expect(Token::Semicolon)?;
        Ok(Statement::Expression(ExpressionStatement { expression }))
    }

    /// The inside of a `for ( ... )` header
    pub fn for_control(&mut self) -> ParseResult<ForControl> {
        match gates::classify_for_control(&self.stream, self.config.max_lookahead) {
            Decision::Decided(ForControlAlternative::Enhanced) => self.enhanced_for_control(),
            Decision::Decided(ForControlAlternative::EmptyInit) => self.basic_for_control(None),
            Decision::Decided(ForControlAlternative::BasicWithDeclaration) => {
                let init = ForInit::LocalVariableDeclaration(self.local_variable_declaration()?);
                self.basic_for_control(Some(init))
            }
            Decision::Decided(ForControlAlternative::BasicWithExpressions) => {
                let init = ForInit::ExpressionList(self.expression_list()?);
                self.basic_for_control(Some(init))
            }
            Decision::Undecidable => {
                let alternatives: [Alternative<ForControl>; 3] = [
                    ("enhanced for header", Parser::enhanced_for_control),
                    ("basic for header with declaration", |p| {
                        let init = ForInit::LocalVariableDeclaration(p.local_variable_declaration()?);
                        p.basic_for_control(Some(init))
                    }),
                    ("basic for header with expressions", |p| {
                        let init = ForInit::ExpressionList(p.expression_list()?);
                        p.basic_for_control(Some(init))
                    }),
                ];
                self.first_of("for header", &alternatives)
            }
        }
    }

    /// Everything after the init slot: `; [expression] ; [updates]`
    fn basic_for_control(&mut self, for_init: Option<ForInit>) -> ParseResult<ForControl> {
        self.expect(Token::Semicolon)?;
        let expression = if self.check(Token::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.expect(Token::Semicolon)?;
        let expression_list = if self.is_at_end() || self.check(Token::RParen) {
            None
        } else {
            Some(self.expression_list()?)
        };
        Ok(ForControl::Basic(BasicForStatement {
            for_init,
            expression,
            expression_list,
        }))
    }

    fn enhanced_for_control(&mut self) -> ParseResult<ForControl> {
        let modifiers = self.modifiers()?;
        let type_type = self.type_type()?;
        let id = self.variable_declarator_id()?;
        self.expect(Token::Colon)?;
        let expression = self.expression()?;
        Ok(ForControl::Enhanced(EnhancedForStatement {
            declaration: LocalVariableDeclaration {
                modifiers,
                type_type,
                declarators: VariableDeclarators {
                    list: vec![VariableDeclarator { id, init: None }],
                },
            },
            expression,
        }))
    }
}
