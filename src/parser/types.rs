//! Type productions: types, type arguments and type parameters

use super::error::ParseResult;
use super::lexer::Token;
use super::parser::Parser;
use crate::cst::{
    ClassOrInterfaceTypeElement, PrimitiveKind, TypeArgument, TypeArguments, TypeBound, TypeParameter,
    TypeParameters, TypeType, Wildcard, WildcardBound,
};

pub(crate) fn primitive_kind(token: Token) -> Option<PrimitiveKind> {
    match token {
        Token::Boolean => Some(PrimitiveKind::Boolean),
        Token::Byte => Some(PrimitiveKind::Byte),
        Token::Short => Some(PrimitiveKind::Short),
        Token::Int => Some(PrimitiveKind::Int),
        Token::Long => Some(PrimitiveKind::Long),
        Token::Char => Some(PrimitiveKind::Char),
        Token::Float => Some(PrimitiveKind::Float),
        Token::Double => Some(PrimitiveKind::Double),
        Token::Void => Some(PrimitiveKind::Void),
        _ => None,
    }
}

impl Parser {
    /// typeType: annotations, a primitive or class type, then `[]` pairs
    pub fn type_type(&mut self) -> ParseResult<TypeType> {
        self.nested(|p| {
            let modifiers = p.annotations()?;
            let base = p.base_type()?;
            let dimensions = p.dimensions();
            Ok(TypeType::annotated(modifiers, base, dimensions))
        })
    }

    fn base_type(&mut self) -> ParseResult<TypeType> {
        if let Some(kind) = self.stream.peek_token(0).and_then(primitive_kind) {
            self.stream.bump();
            return Ok(TypeType::primitive(kind));
        }
        if self.check(Token::Identifier) {
            return self.class_type(false);
        }
        self.unexpected(&["type"])
    }

    /// Dotted reference type; `allow_diamond` admits `<>` (instance creation only)
    pub(crate) fn class_type(&mut self, allow_diamond: bool) -> ParseResult<TypeType> {
        let mut elements = vec![self.class_type_element(allow_diamond)?];
        while self.check(Token::Dot) && self.check_at(1, Token::Identifier) {
            self.stream.bump();
            elements.push(self.class_type_element(allow_diamond)?);
        }
        Ok(TypeType::from_elements(elements))
    }

    fn class_type_element(&mut self, allow_diamond: bool) -> ParseResult<ClassOrInterfaceTypeElement> {
        let name = self.expect_identifier()?;
        let type_arguments = if self.check(Token::Lt) {
            Some(self.type_arguments_with(allow_diamond)?)
        } else {
            None
        };
        Ok(ClassOrInterfaceTypeElement { name, type_arguments })
    }

    /// Count of `[]` pairs at the cursor
    pub(crate) fn dimensions(&mut self) -> usize {
        let mut count = 0;
        while self.check(Token::LBracket) && self.check_at(1, Token::RBracket) {
            self.stream.bump();
            self.stream.bump();
            count += 1;
        }
        count
    }

    pub fn type_arguments(&mut self) -> ParseResult<TypeArguments> {
        self.type_arguments_with(false)
    }

    fn type_arguments_with(&mut self, allow_diamond: bool) -> ParseResult<TypeArguments> {
        self.expect(Token::Lt)?;
        if allow_diamond && self.match_token(Token::Gt) {
            return Ok(TypeArguments { list: Vec::new() });
        }

        let mut list = vec![self.type_argument()?];
        while self.match_token(Token::Comma) {
            list.push(self.type_argument()?);
        }
        self.expect(Token::Gt)?;
        Ok(TypeArguments { list })
    }

    fn type_argument(&mut self) -> ParseResult<TypeArgument> {
        self.nested(|p| {
            let modifiers = p.annotations()?;
            if p.match_token(Token::Question) {
                let bound = if p.match_token(Token::Extends) {
                    Some(WildcardBound::Extends(p.type_type()?))
                } else if p.match_token(Token::Super) {
                    Some(WildcardBound::Super(p.type_type()?))
                } else {
                    None
                };
                return Ok(TypeArgument::Wildcard(Wildcard { modifiers, bound }));
            }
            let base = p.base_type()?;
            let dimensions = p.dimensions();
            Ok(TypeArgument::Type(TypeType::annotated(modifiers, base, dimensions)))
        })
    }

    /// typeParameter: annotations, a name and an optional `extends` bound
    pub fn type_parameter(&mut self) -> ParseResult<TypeParameter> {
        let modifiers = self.annotations()?;
        let name = self.expect_identifier()?;
        let type_bound = if self.match_token(Token::Extends) {
            let mut list = vec![self.type_type()?];
            while self.match_token(Token::Amp) {
                list.push(self.type_type()?);
            }
            Some(TypeBound { list })
        } else {
            None
        };
        Ok(TypeParameter { modifiers, name, type_bound })
    }

    pub fn type_parameters(&mut self) -> ParseResult<TypeParameters> {
        self.expect(Token::Lt)?;
        let mut list = vec![self.type_parameter()?];
        while self.match_token(Token::Comma) {
            list.push(self.type_parameter()?);
        }
        self.expect(Token::Gt)?;
        Ok(TypeParameters { list })
    }
}
