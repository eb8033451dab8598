//! Modifier prefixes, annotations and local variable declarations

use super::error::ParseResult;
use super::lexer::Token;
use super::parser::Parser;
use crate::cst::{
    Annotation, AnnotationValue, ArrayInitializer, ElementValue, ElementValueArrayInitializer, ElementValuePair,
    ElementValuePairs, LocalVariableDeclaration, Modifier, ModifierKeyword, QualifiedName, VariableDeclarator,
    VariableDeclaratorId, VariableDeclarators, VariableInitializer,
};

fn modifier_keyword(token: Token) -> Option<ModifierKeyword> {
    match token {
        Token::Public => Some(ModifierKeyword::Public),
        Token::Protected => Some(ModifierKeyword::Protected),
        Token::Private => Some(ModifierKeyword::Private),
        Token::Static => Some(ModifierKeyword::Static),
        Token::Abstract => Some(ModifierKeyword::Abstract),
        Token::Final => Some(ModifierKeyword::Final),
        Token::Native => Some(ModifierKeyword::Native),
        Token::Synchronized => Some(ModifierKeyword::Synchronized),
        Token::Transient => Some(ModifierKeyword::Transient),
        Token::Volatile => Some(ModifierKeyword::Volatile),
        Token::Strictfp => Some(ModifierKeyword::Strictfp),
        Token::Default => Some(ModifierKeyword::Default),
        _ => None,
    }
}

impl Parser {
    fn at_annotation(&self) -> bool {
        self.check(Token::At) && !self.check_at(1, Token::Interface)
    }

    /// Annotations and keyword modifiers in source order, possibly none
    pub fn modifiers(&mut self) -> ParseResult<Vec<Modifier>> {
        let mut modifiers = Vec::new();
        loop {
            if self.at_annotation() {
                modifiers.push(Modifier::Annotation(self.annotation()?));
                continue;
            }
            // `synchronized (` opens a statement
            if self.check(Token::Synchronized) && self.check_at(1, Token::LParen) {
                break;
            }
            match self.stream.peek_token(0).and_then(modifier_keyword) {
                Some(keyword) => {
                    self.stream.bump();
                    modifiers.push(Modifier::keyword(keyword));
                }
                None => break,
            }
        }
        Ok(modifiers)
    }

    /// Annotations only, as allowed in front of a type
    pub(crate) fn annotations(&mut self) -> ParseResult<Vec<Modifier>> {
        let mut annotations = Vec::new();
        while self.at_annotation() {
            annotations.push(Modifier::Annotation(self.annotation()?));
        }
        Ok(annotations)
    }

    pub fn annotation(&mut self) -> ParseResult<Annotation> {
        self.expect(Token::At)?;
        let name = self.qualified_name()?;

        if !self.match_token(Token::LParen) {
            return Ok(Annotation { name, has_braces: false, value: None });
        }
        let value = if self.check(Token::RParen) {
            None
        } else {
            Some(self.annotation_value()?)
        };
        self.expect(Token::RParen)?;
        Ok(Annotation { name, has_braces: true, value })
    }

    pub(crate) fn qualified_name(&mut self) -> ParseResult<QualifiedName> {
        let mut name = vec![self.expect_identifier()?];
        while self.check(Token::Dot) && self.check_at(1, Token::Identifier) {
            self.stream.bump();
            name.push(self.expect_identifier()?);
        }
        Ok(QualifiedName { name })
    }

    fn annotation_value(&mut self) -> ParseResult<AnnotationValue> {
        if !(self.check(Token::Identifier) && self.check_at(1, Token::Assign)) {
            return Ok(AnnotationValue::Single(self.element_value()?));
        }

        let mut list = vec![self.element_value_pair()?];
        while self.match_token(Token::Comma) {
            list.push(self.element_value_pair()?);
        }
        Ok(AnnotationValue::Pairs(ElementValuePairs { list }))
    }

    fn element_value_pair(&mut self) -> ParseResult<ElementValuePair> {
        let key = self.expect_identifier()?;
        self.expect(Token::Assign)?;
        let value = self.element_value()?;
        Ok(ElementValuePair { key, value })
    }

    fn element_value(&mut self) -> ParseResult<ElementValue> {
        self.nested(|p| {
            if p.at_annotation() {
                return Ok(ElementValue::Annotation(Box::new(p.annotation()?)));
            }
            if p.match_token(Token::LBrace) {
                let mut list = Vec::new();
                while !p.check(Token::RBrace) {
                    list.push(p.element_value()?);
                    if !p.match_token(Token::Comma) {
                        break;
                    }
                }
                p.expect(Token::RBrace)?;
                return Ok(ElementValue::Array(ElementValueArrayInitializer { list }));
            }
            Ok(ElementValue::Expression(p.expression()?))
        })
    }

    /// localVariableDeclaration: modifiers, a type and one or more declarators
    pub fn local_variable_declaration(&mut self) -> ParseResult<LocalVariableDeclaration> {
        let modifiers = self.modifiers()?;
        let type_type = self.type_type()?;
        let declarators = self.variable_declarators()?;
        Ok(LocalVariableDeclaration { modifiers, type_type, declarators })
    }

    fn variable_declarators(&mut self) -> ParseResult<VariableDeclarators> {
        let mut list = vec![self.variable_declarator()?];
        while self.match_token(Token::Comma) {
            list.push(self.variable_declarator()?);
        }
        Ok(VariableDeclarators { list })
    }

    fn variable_declarator(&mut self) -> ParseResult<VariableDeclarator> {
        let id = self.variable_declarator_id()?;
        let init = if self.match_token(Token::Assign) {
            Some(self.variable_initializer()?)
        } else {
            None
        };
        Ok(VariableDeclarator { id, init })
    }

    pub(crate) fn variable_declarator_id(&mut self) -> ParseResult<VariableDeclaratorId> {
        let id = self.expect_identifier()?;
        let dimensions = self.dimensions();
        Ok(VariableDeclaratorId { id, dimensions })
    }

    fn variable_initializer(&mut self) -> ParseResult<VariableInitializer> {
        self.nested(|p| {
            if p.check(Token::LBrace) {
                Ok(VariableInitializer::Array(p.array_initializer()?))
            } else {
                Ok(VariableInitializer::Expression(p.expression()?))
            }
        })
    }

    /// `{a, b, }` with an optional trailing comma
    pub(crate) fn array_initializer(&mut self) -> ParseResult<ArrayInitializer> {
        self.expect(Token::LBrace)?;
        let mut list = Vec::new();
        while !self.check(Token::RBrace) {
            list.push(self.variable_initializer()?);
            if !self.match_token(Token::Comma) {
                break;
            }
        }
        self.expect(Token::RBrace)?;
        Ok(ArrayInitializer { list })
    }
}
